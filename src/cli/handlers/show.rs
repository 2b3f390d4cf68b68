use hashcodec::{AlgorithmCatalog, HashAlgorithm, Settings};

pub fn handle(algorithm: &str, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let descriptor = AlgorithmCatalog::builtin().get(settings.resolve_alias(algorithm))?;

    println!("{} ({})", descriptor.display_name, descriptor.id);
    println!("  category:   {}", descriptor.category.as_str());
    println!(
        "  decode:     {}",
        if descriptor.reversible {
            "available"
        } else {
            "not available (one-way)"
        }
    );

    if !descriptor.aliases.is_empty() {
        println!("  aliases:    {}", descriptor.aliases.join(", "));
    }

    let mut user_aliases: Vec<&str> = settings
        .aliases
        .iter()
        .filter(|(_, target)| target.eq_ignore_ascii_case(descriptor.id))
        .map(|(alias, _)| alias.as_str())
        .collect();
    if !user_aliases.is_empty() {
        user_aliases.sort_unstable();
        println!("  configured: {}", user_aliases.join(", "));
    }

    if let Ok(hash) = HashAlgorithm::from_str(descriptor.id) {
        println!("  digest:     {} bytes", hash.output_size());
        if let Some(sha) = hash.sha_variant() {
            println!("  provider:   {}", sha.as_str());
        }
    }

    Ok(())
}
