mod args;

use args::{Cli, Commands, CommonArgs};
use clap::Parser;

use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use aespipe::CipherConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aespipe::Error),
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    match aes_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn aes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(common) => {
            let config = load_config(&common)?;
            let plaintext = fs::read(&common.input)?;

            let start = Instant::now();
            let ciphertext = aespipe::encrypt(&plaintext, &config)?;
            let duration = start.elapsed();

            fs::write(&common.output, &ciphertext)?;
            println!(
                "Encrypted {} bytes in {} ms ({}/{}/{})",
                plaintext.len(),
                duration.as_millis(),
                config.mode,
                config.padding,
                config.encoding
            );
            Ok(())
        }
        Commands::Decrypt(common) => {
            let config = load_config(&common)?;
            let text = fs::read_to_string(&common.input)?;

            let start = Instant::now();
            // tolerate the trailing newline most editors add
            let plaintext = aespipe::decrypt(text.trim(), &config)?;
            let duration = start.elapsed();

            fs::write(&common.output, &plaintext)?;
            println!(
                "Decrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

fn load_config(common: &CommonArgs) -> Result<CipherConfig, CliError> {
    let key = fs::read(&common.key)?;
    let iv = match &common.iv {
        Some(path) => fs::read(path)?,
        None => Vec::new(),
    };

    Ok(CipherConfig::new(&key, &iv)
        .with_mode(common.mode.into())
        .with_padding(common.padding.into())
        .with_encoding(common.encoding.into()))
}
