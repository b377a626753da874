// SHA3-256 Validator - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// NIST CAVS vector runner: exit 0 when every vector in every file passes,
// exit 1 on any failing vector or any corpus that cannot be parsed.

use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};
use sha3_validator::{
    core::{hasher::smoke_check, types::{BatchReport, VectorArgs}},
    utils::initialize_logging,
    vectors::{BatchValidator, corpus_name, report},
    HashUnderTest, Sha3_256Hasher,
};

const LOG_TARGET: &str = "sha3::validator::main";

fn main() -> anyhow::Result<()> {
    let args = VectorArgs::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    initialize_logging(&args.log_level, args.log_config.as_deref())?;

    let hasher = Sha3_256Hasher;
    info!(target: LOG_TARGET, "🚀 NIST SHA3-256 Validation ({})", hasher.name());
    info!(target: LOG_TARGET, "📁 Corpus files: {}", args.corpora.len());

    if !smoke_check(&hasher) {
        warn!(target: LOG_TARGET, "⚠️ Hash under test returned different digests for identical empty inputs");
    }

    let validator = BatchValidator::new(hasher).with_progress_interval(args.progress_interval);
    let mut batch = BatchReport::default();

    for path in &args.corpora {
        let name = corpus_name(path);
        match validator.validate_file(&name, path) {
            Ok(corpus) => batch.corpora.push(corpus),
            Err(e) => {
                error!(target: LOG_TARGET, "❌ ERROR in {} validation: {}", name, e);
                eprintln!("❌ ERROR in {} validation: {}", name, e);
                std::process::exit(1);
            }
        }
    }

    if args.json {
        println!("{}", report::render_json(&batch).context("failed to serialize report")?);
    } else {
        print!("{}", report::render_text(&batch));
    }

    if batch.all_passed() {
        info!(target: LOG_TARGET, "✅ All {} vectors passed", batch.total_passed());
        Ok(())
    } else {
        error!(target: LOG_TARGET, "❌ {} of {} vectors failed", batch.total_failed(), batch.total());
        std::process::exit(1);
    }
}
