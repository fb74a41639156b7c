use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt a raw input file into rendered ciphertext text
    Encrypt(CommonArgs),

    /// Decrypt rendered ciphertext text back into raw bytes
    Decrypt(CommonArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Mode of operation.
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = Mode::ModeCBC)]
    pub mode: Mode,

    /// Padding scheme.
    #[arg(short = 'p', long = "padding", value_enum, default_value_t = Padding::Pkcs7)]
    pub padding: Padding,

    /// Text encoding of the ciphertext.
    #[arg(short = 'e', long = "encoding", value_enum, default_value_t = Encoding::Base64)]
    pub encoding: Encoding,

    /// Input file path.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Output file path.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Key file path (raw 16, 24, or 32 bytes).
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,

    /// IV file path (raw 16 bytes). Not needed for ECB.
    #[arg(long = "iv")]
    pub iv: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Mode {
    #[value(name = "ecb")]
    ModeECB,
    #[value(name = "cbc")]
    ModeCBC,
    #[value(name = "cfb")]
    ModeCFB,
    #[value(name = "ofb")]
    ModeOFB,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Padding {
    #[value(name = "pkcs5")]
    Pkcs5,
    #[value(name = "pkcs7")]
    Pkcs7,
    #[value(name = "zero")]
    Zero,
    #[value(name = "iso10126")]
    Iso10126,
    #[value(name = "ansix923")]
    AnsiX923,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Encoding {
    #[value(name = "base64")]
    Base64,
    #[value(name = "hex")]
    Hex,
}

impl From<Mode> for aespipe::Mode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::ModeECB => aespipe::Mode::Ecb,
            Mode::ModeCBC => aespipe::Mode::Cbc,
            Mode::ModeCFB => aespipe::Mode::Cfb,
            Mode::ModeOFB => aespipe::Mode::Ofb,
        }
    }
}

impl From<Padding> for aespipe::Padding {
    fn from(padding: Padding) -> Self {
        match padding {
            Padding::Pkcs5 | Padding::Pkcs7 => aespipe::Padding::Pkcs7,
            Padding::Zero => aespipe::Padding::Zero,
            Padding::Iso10126 => aespipe::Padding::Iso10126,
            Padding::AnsiX923 => aespipe::Padding::AnsiX923,
        }
    }
}

impl From<Encoding> for aespipe::Encoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Base64 => aespipe::Encoding::Base64,
            Encoding::Hex => aespipe::Encoding::Hex,
        }
    }
}
