//! Generates both Python modules for an inline schema and prints them.
//!
//! Run with: `cargo run --example generate`

use sdlgen::prelude::*;

const SCHEMA: &str = r#"
enum Status {
    ACTIVE
    SUSPENDED
}

interface Node {
    id: ID!
}

type Account implements Node {
    id: ID!
    owner: String!
    balance: Float
    status: Status!
    history(limit: Int, status: Status = ACTIVE): [Account!]!
}

union SearchResult = Account

type Query {
    account(id: ID!): Account
    search(term: String!): [SearchResult]
}

type Mutation {
    suspend(accountId: ID!): Account
}
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let document = parse_schema(SCHEMA)?;
    let mut writer = MemoryWriter::new();
    Generator::new(&document).generate_into(&mut writer)?;

    for stage in Stage::ALL {
        if let Some(source) = writer.get(stage) {
            println!("# ---- {}.py ----", stage.name());
            print!("{source}");
            println!();
        }
    }

    Ok(())
}
