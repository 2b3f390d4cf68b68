use crate::cli::{args::ListArgs, global::GlobalArgs};
use hashcodec::{AlgorithmCatalog, AlgorithmDescriptor};

pub fn handle(args: ListArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = AlgorithmCatalog::builtin();
    let descriptors: Vec<&AlgorithmDescriptor> = match args.category {
        Some(category) => catalog.by_category(category.into()).collect(),
        None => catalog.list().collect(),
    };

    if global.json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    for descriptor in descriptors {
        let direction = if descriptor.reversible {
            "encode/decode"
        } else {
            "one-way"
        };
        println!(
            "  {:<10} {:<14} {:<9} {}",
            descriptor.id,
            descriptor.display_name,
            descriptor.category.as_str(),
            direction
        );
    }
    Ok(())
}
