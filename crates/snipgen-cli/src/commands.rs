use crate::cli::{Commands, Location, PrefixStyle};
use snipgen_core::{encode, Config, Input, Result, SnipgenError, SnippetFile, SnippetRecord};

pub fn handle_command(command: Commands, config: &Config, lossy: bool) -> Result<()> {
    match command {
        Commands::Array { text } => handle_array(&text, lossy),
        Commands::Snippet {
            text,
            name,
            language,
            prefix,
            description,
            prefix_style,
            write,
            location,
        } => {
            let text = Input::resolve(&text, lossy)?.into_text();
            let record = SnippetRecord::with_strategy(
                name,
                text,
                language,
                prefix,
                description,
                prefix_style.strategy(),
            )?;
            if write {
                write_snippet(&record, config, &location)
            } else {
                println!("{}", record.to_json()?);
                Ok(())
            }
        }
        Commands::List { language, location } => handle_list(&language, config, &location),
        Commands::Remove {
            name,
            language,
            location,
        } => handle_remove(&name, &language, config, &location),
    }
}

fn handle_array(text: &str, lossy: bool) -> Result<()> {
    let input = Input::resolve(text, lossy)?;
    println!("{}", encode(input.text()));
    Ok(())
}

fn write_snippet(record: &SnippetRecord, config: &Config, location: &Location) -> Result<()> {
    let dir = config.snippets_dir_or(location.out_dir.as_deref());
    let mut file = SnippetFile::load(dir, record.language())?;
    let replaced = file.insert(record)?;
    let path = file.save(dir)?;

    let verb = if replaced { "updated in" } else { "added to" };
    println!(
        "Snippet '{}' {} {}",
        record.name(),
        verb,
        path.display()
    );
    Ok(())
}

fn handle_list(language: &str, config: &Config, location: &Location) -> Result<()> {
    let dir = config.snippets_dir_or(location.out_dir.as_deref());
    let file = SnippetFile::load(dir, language)?;

    if file.is_empty() {
        eprintln!("No snippets found in {}", file.path_in(dir)?.display());
        return Ok(());
    }

    for name in file.names() {
        println!("{}", name);
    }
    Ok(())
}

fn handle_remove(name: &str, language: &str, config: &Config, location: &Location) -> Result<()> {
    let dir = config.snippets_dir_or(location.out_dir.as_deref());
    let mut file = SnippetFile::load(dir, language)?;

    if !file.remove(name) {
        return Err(SnipgenError::InvalidArgument(format!(
            "Snippet '{}' not found in {}",
            name,
            file.path_in(dir)?.display()
        )));
    }

    let path = file.save(dir)?;
    println!("Snippet '{}' removed from {}", name, path.display());
    Ok(())
}
