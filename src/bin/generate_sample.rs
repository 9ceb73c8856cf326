use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

struct SampleRow {
    flight_number: i64,
    site: String,
    class: i64,
    payload_mass: f64,
    booster_category: String,
}

fn generate_rows(rng: &mut SimpleRng) -> Vec<SampleRow> {
    let sites = [
        ("CCAFS LC-40", 26),
        ("VAFB SLC-4E", 10),
        ("KSC LC-39A", 13),
        ("CCAFS SLC-40", 7),
    ];
    // (category, payload range, success rate)
    let boosters = [
        ("v1.0", (0.0, 600.0), 0.4),
        ("v1.1", (300.0, 5000.0), 0.6),
        ("FT", (500.0, 9600.0), 0.85),
        ("B4", (2000.0, 9600.0), 0.9),
        ("B5", (3000.0, 9600.0), 0.95),
    ];

    let mut rows = Vec::new();
    let mut flight_number: i64 = 1;

    for (site, n_launches) in sites {
        for _ in 0..n_launches {
            let (category, (lo, hi), success_rate) =
                boosters[(rng.next_u64() % boosters.len() as u64) as usize];
            let payload_mass = (lo + rng.next_f64() * (hi - lo)).round();
            let class = i64::from(rng.next_f64() < success_rate);

            rows.push(SampleRow {
                flight_number,
                site: site.to_string(),
                class,
                payload_mass,
                booster_category: category.to_string(),
            });
            flight_number += 1;
        }
    }
    rows
}

fn write_csv(rows: &[SampleRow], path: &str) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version Category",
        ])
        .expect("Failed to write CSV header");

    for row in rows {
        writer
            .write_record([
                row.flight_number.to_string(),
                row.site.clone(),
                row.class.to_string(),
                format!("{:.1}", row.payload_mass),
                row.booster_category.clone(),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_parquet(rows: &[SampleRow], path: &str) {
    let flight_array = Int64Array::from(rows.iter().map(|r| r.flight_number).collect::<Vec<_>>());
    let site_array = StringArray::from(rows.iter().map(|r| r.site.as_str()).collect::<Vec<_>>());
    let class_array = Int64Array::from(rows.iter().map(|r| r.class).collect::<Vec<_>>());
    let payload_array =
        Float64Array::from(rows.iter().map(|r| r.payload_mass).collect::<Vec<_>>());
    let booster_array = StringArray::from(
        rows.iter()
            .map(|r| r.booster_category.as_str())
            .collect::<Vec<_>>(),
    );

    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(flight_array),
            Arc::new(site_array),
            Arc::new(class_array),
            Arc::new(payload_array),
            Arc::new(booster_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng);

    write_csv(&rows, "launch_records.csv");
    write_parquet(&rows, "launch_records.parquet");

    println!(
        "Wrote {} launch records to launch_records.csv and launch_records.parquet",
        rows.len()
    );
}
