use paraguard_lib::models::{FeatureVector, SentenceInspection};
use paraguard_lib::services::detection::{extract_features, inspect_sentences};
use paraguard_lib::services::{preview, read_document, EnglishResources};
use serde::Serialize;

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  cargo run --bin inspect_text -- <path.docx|path.txt> [--original <path>] [--sentences <n>] [--tokens] [--out <json_path>]\n\nNotes:\n  - `--tokens` prints every token with its POS tag.\n  - `--original` adds the similarity feature to the summary."
        );
        return Ok(());
    }

    let path = std::path::PathBuf::from(&args[1]);
    let original_path = parse_arg_value(&args, "--original");
    let sentences_n: usize = parse_arg_value(&args, "--sentences")
        .and_then(|s| s.parse().ok())
        .unwrap_or(50);
    let show_tokens = has_flag(&args, "--tokens");
    let out_path = parse_arg_value(&args, "--out");

    let resources = EnglishResources::new().map_err(|e| e.to_string())?;
    let text = read_document(&path).map_err(|e| e.to_string())?;
    let original = match &original_path {
        Some(p) => Some(read_document(std::path::Path::new(p)).map_err(|e| e.to_string())?),
        None => None,
    };

    let sentences = inspect_sentences(&resources, &text);
    let features = extract_features(&resources, &text, original.as_deref()).map_err(|e| e.to_string())?;

    println!("File: {}", path.display());
    println!("Extracted: {} chars ({} bytes)", text.chars().count(), text.len());
    println!("Sentences: {}", sentences.len());
    println!();

    for s in sentences.iter().take(sentences_n) {
        let entropy = s
            .entropy
            .map(|e| format!("{:.3}", e))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "[S{:04}] tokens={} structure={:.1} entropy={} conj={}  {}",
            s.index,
            s.tokens.len(),
            s.structure_score,
            entropy,
            if s.has_complex_conjunction { "yes" } else { "no" },
            preview(&s.text, 120)
        );
        if show_tokens {
            let tagged: Vec<String> = s.tokens.iter().map(|t| format!("{}/{}", t.text, t.tag)).collect();
            println!("        {}", tagged.join(" "));
        }
    }
    if sentences.len() > sentences_n {
        println!("... ({} more sentences)", sentences.len() - sentences_n);
    }

    println!();
    println!("Synonym irregularity: {:.4}", features.synonym_irregularity);
    println!("Structure complexity: {:.4}", features.structure_complexity);
    println!("Order entropy:        {:.4}", features.order_entropy);
    println!("Conjunction density:  {:.4}", features.conjunction_density);
    println!("Similarity:           {:.4}", features.similarity);

    if let Some(out_path) = out_path {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Output {
            file: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            original: Option<String>,
            extracted_chars: usize,
            features: FeatureVector,
            sentences: Vec<SentenceInspection>,
        }

        let out = Output {
            file: path.display().to_string(),
            original: original_path,
            extracted_chars: text.chars().count(),
            features,
            sentences,
        };

        let json = serde_json::to_string_pretty(&out).map_err(|e| e.to_string())?;
        std::fs::write(&out_path, json).map_err(|e| format!("write out failed: {}", e))?;
        println!();
        println!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
