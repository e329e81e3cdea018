use case_sanitiser::definition::{CaseEventTrigger, CaseField, FieldType, ListItem};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value, json};
use std::fs;
use std::path::Path;

/// A CLI tool to generate event triggers and matching forms for the sanitiser
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to write `trigger.json` and `form.json` into
    #[arg(short, long, default_value = "generated")]
    output_dir: String,

    /// Number of top-level case fields
    #[arg(long, default_value_t = 20)]
    fields: usize,

    /// Maximum nesting depth of complex fields and collections
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// Number of candidate items per dynamic list
    #[arg(long, default_value_t = 5)]
    items: usize,

    /// Maximum number of elements per collection
    #[arg(long, default_value_t = 4)]
    max_elements: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

struct Generator {
    rng: StdRng,
    items: usize,
    max_elements: usize,
    next_id: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.items == 0 {
        eprintln!("Error: --items must be at least 1");
        std::process::exit(1);
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut generator = Generator {
        rng,
        items: cli.items,
        max_elements: cli.max_elements,
        next_id: 0,
    };

    println!(
        "Generating trigger with {} top-level fields (depth {})...",
        cli.fields, cli.depth
    );

    let mut case_fields = Vec::with_capacity(cli.fields);
    let mut form = Map::new();
    for _ in 0..cli.fields {
        let (field, value) = generator.field(cli.depth);
        form.insert(field.id.clone(), value);
        case_fields.push(field);
    }

    let trigger = CaseEventTrigger {
        id: "generatedEvent".to_string(),
        name: "Generated event".to_string(),
        case_fields,
        event_token: "generated-token".to_string(),
        ..CaseEventTrigger::default()
    };

    let dir = Path::new(&cli.output_dir);
    fs::create_dir_all(dir)?;
    fs::write(dir.join("trigger.json"), serde_json::to_string_pretty(&trigger)?)?;
    fs::write(dir.join("form.json"), serde_json::to_string_pretty(&Value::Object(form))?)?;

    println!(
        "Successfully generated '{}' and '{}'",
        dir.join("trigger.json").display(),
        dir.join("form.json").display()
    );
    Ok(())
}

impl Generator {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}{}", prefix, self.next_id)
    }

    fn list_items(&mut self) -> Vec<ListItem> {
        (0..self.items)
            .map(|i| ListItem::new(format!("C{}", i), format!("Choice {}", i)))
            .collect()
    }

    /// A raw selection: usually a valid code, sometimes a stale one.
    fn selection(&mut self) -> Value {
        if self.rng.random_bool(0.9) {
            json!(format!("C{}", self.rng.random_range(0..self.items)))
        } else {
            json!("STALE")
        }
    }

    /// One case field and a form value for it.
    fn field(&mut self, depth: usize) -> (CaseField, Value) {
        let roll = if depth == 0 {
            self.rng.random_range(0..2)
        } else {
            self.rng.random_range(0..5)
        };
        match roll {
            0 => {
                let id = self.id("text");
                let value = json!(format!("value of {}", id));
                (CaseField::new(&id, FieldType::of("Text")), value)
            }
            1 => {
                let id = self.id("list");
                let field = CaseField::new(&id, FieldType::of(FieldType::DYNAMIC_LIST))
                    .with_list_items(self.list_items());
                (field, self.selection())
            }
            2 => {
                let id = self.id("complex");
                let (members, value) = self.members(depth - 1);
                (CaseField::new(&id, FieldType::complex(&id, members)), value)
            }
            3 => {
                let id = self.id("collection");
                let (members, _) = self.members(depth - 1);
                let count = self.rng.random_range(0..=self.max_elements);
                let elements: Vec<Value> = (0..count)
                    .map(|i| {
                        let value = self.member_values(&members);
                        json!({ "id": format!("{}-{}", id, i), "value": value })
                    })
                    .collect();
                let element_type = FieldType::complex(&format!("{}Element", id), members);
                (
                    CaseField::new(&id, FieldType::collection(&id, element_type)),
                    Value::Array(elements),
                )
            }
            _ => {
                let id = self.id("lists");
                let items = self.list_items();
                let count = self.rng.random_range(0..=self.max_elements);
                let elements: Vec<Value> = (0..count)
                    .map(|i| json!({ "id": format!("{}-{}", id, i), "value": self.selection() }))
                    .collect();
                let element_type = FieldType::of(FieldType::DYNAMIC_LIST);
                let field = CaseField::new(&id, FieldType::collection(&id, element_type))
                    .with_value(json!([{ "id": "seed", "value": { "value": {}, "list_items": items } }]));
                (field, Value::Array(elements))
            }
        }
    }

    fn members(&mut self, depth: usize) -> (Vec<CaseField>, Value) {
        let count = self.rng.random_range(1..=4);
        let mut fields = Vec::with_capacity(count);
        let mut value = Map::new();
        for _ in 0..count {
            let (field, member_value) = self.field(depth);
            value.insert(field.id.clone(), member_value);
            fields.push(field);
        }
        (fields, Value::Object(value))
    }

    /// Fresh values for an existing set of members, used for collection elements.
    fn member_values(&mut self, members: &[CaseField]) -> Value {
        let mut value = Map::new();
        for member in members {
            let member_value = if member.is_of_type(FieldType::DYNAMIC_LIST) {
                self.selection()
            } else if member.is_of_type(FieldType::COMPLEX) {
                self.member_values(&member.field_type.complex_fields)
            } else if member.is_of_type(FieldType::COLLECTION) {
                Value::Array(Vec::new())
            } else {
                json!(format!("value of {}", member.id))
            };
            value.insert(member.id.clone(), member_value);
        }
        Value::Object(value)
    }
}
