/// UI layer: panels (controls) and plots (charts).

pub mod panels;
pub mod plot;
