use throwaway_lookup::{LookupOptions, lookup};

#[tokio::main]
async fn main() -> Result<(), throwaway_lookup::Error> {
    let subjects: Vec<String> = std::env::args().skip(1).collect();
    if subjects.is_empty() {
        eprintln!("usage: lookup <email-or-domain>...");
        std::process::exit(2);
    }

    let options = LookupOptions::default();
    for subject in &subjects {
        let result = lookup(subject, &options).await?;
        println!("{subject}: {}", serde_json::Value::Object(result.into_inner()));
    }

    Ok(())
}
