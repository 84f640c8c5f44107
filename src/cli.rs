// Command-line front end for the Base-85 codec.
//
// Subcommands read the whole input (file or stdin), run it through the
// text adapters, and write the result (file or stdout).

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::encoding::{Encoding, Preset};
use crate::text::{self, DecodeOptions, EncodeOptions};

const BUF_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Base-85 encoder/decoder.
#[derive(Parser, Debug)]
#[command(
    name = "base85",
    version,
    about = "Base-85 encoder/decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode binary input as Base-85 text.
    Encode(EncodeArgs),
    /// Decode Base-85 text back to binary.
    Decode(DecodeArgs),
    /// List the built-in variants.
    Variants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Ascii,
    Rfc1924,
    Btoa,
    Adobe,
    Z85,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WrapArg {
    /// No line breaks.
    #[value(name = "0")]
    None,
    /// Break after 64 symbols.
    #[value(name = "64")]
    Columns64,
    /// Break after 76 symbols.
    #[value(name = "76")]
    Columns76,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LineEndingArg {
    Crlf,
    Cr,
    Lf,
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input file (default: stdin).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "input_pos")]
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "output_pos")]
    output: Option<PathBuf>,

    /// Write output to stdout.
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Base-85 variant.
    #[arg(long, short = 'e', value_enum, default_value_t = VariantArg::Rfc1924)]
    variant: VariantArg,

    /// Input file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,

    /// Output file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    output_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Wrap encoded lines after this many symbols.
    #[arg(long, short = 'w', value_enum, default_value_t = WrapArg::None)]
    wrap: WrapArg,

    /// Line ending used when wrapping.
    #[arg(long = "line-ending", value_enum, default_value_t = LineEndingArg::Lf)]
    line_ending: LineEndingArg,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Skip bytes that are not part of the encoding (line breaks, spaces).
    #[arg(long = "ignore-garbage", short = 'i')]
    ignore_garbage: bool,
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Encode,
    Decode,
    Variants,
}

#[derive(Debug)]
struct Options {
    command: Command,
    use_stdout: bool,
    force: bool,
    quiet: bool,
    verbose: u8,
    preset: Preset,
    encode_options: EncodeOptions,
    decode_options: DecodeOptions,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    json_output: bool,
}

fn preset_for(variant: VariantArg) -> Preset {
    match variant {
        VariantArg::Ascii => Preset::Ascii,
        VariantArg::Rfc1924 => Preset::Rfc1924,
        VariantArg::Btoa => Preset::Btoa,
        VariantArg::Adobe => Preset::Adobe,
        VariantArg::Z85 => Preset::Z85,
    }
}

fn encode_options_for(wrap: WrapArg, line_ending: LineEndingArg) -> EncodeOptions {
    let length = match wrap {
        WrapArg::None => EncodeOptions::empty(),
        WrapArg::Columns64 => EncodeOptions::LINE_LENGTH_64,
        WrapArg::Columns76 => EncodeOptions::LINE_LENGTH_76,
    };
    let ending = match line_ending {
        LineEndingArg::Crlf => EncodeOptions::CARRIAGE_RETURN | EncodeOptions::LINE_FEED,
        LineEndingArg::Cr => EncodeOptions::CARRIAGE_RETURN,
        LineEndingArg::Lf => EncodeOptions::LINE_FEED,
    };
    length | ending
}

fn resolve_options(cli: Cli) -> Options {
    let mut opts = Options {
        command: Command::Variants,
        use_stdout: false,
        force: cli.force,
        quiet: cli.quiet,
        verbose: cli.verbose.min(2),
        preset: Preset::Rfc1924,
        encode_options: EncodeOptions::empty(),
        decode_options: DecodeOptions::empty(),
        input_file: None,
        output_file: None,
        json_output: cli.json_output,
    };

    let io = match cli.command {
        Cmd::Encode(args) => {
            opts.command = Command::Encode;
            opts.encode_options = encode_options_for(args.wrap, args.line_ending);
            args.io
        }
        Cmd::Decode(args) => {
            opts.command = Command::Decode;
            if args.ignore_garbage {
                opts.decode_options = DecodeOptions::IGNORE_UNKNOWN;
            }
            args.io
        }
        Cmd::Variants => return opts,
    };

    opts.use_stdout = io.stdout;
    opts.preset = preset_for(io.variant);
    opts.input_file = io.input.or(io.input_pos);
    opts.output_file = io.output.or(io.output_pos);
    opts
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("base85".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Input / output plumbing
// ---------------------------------------------------------------------------

fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

fn open_output(opts: &Options) -> Result<Box<dyn Write>, String> {
    match (opts.use_stdout, &opts.output_file) {
        (true, _) | (_, None) => Ok(Box::new(BufWriter::with_capacity(
            BUF_SIZE,
            io::stdout().lock(),
        ))),
        (false, Some(path)) => {
            if path.exists() && !opts.force {
                return Err(format!(
                    "output file exists, use -f to overwrite: {}",
                    path.display()
                ));
            }
            File::create(path)
                .map(|f| Box::new(BufWriter::with_capacity(BUF_SIZE, f)) as Box<dyn Write>)
                .map_err(|e| format!("output file: {}: {e}", path.display()))
        }
    }
}

fn write_output(opts: &Options, bytes: &[u8]) -> Result<(), String> {
    let mut writer = open_output(opts)?;
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| format!("write error: {e}"))
}

fn report(opts: &Options, command: &str, input_size: usize, output_size: usize) {
    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "base85: {command}: variant: {}, input size: {input_size}, output size: {output_size}",
            opts.preset
        );
    }

    if opts.json_output {
        let json = serde_json::json!({
            "command": command,
            "variant": opts.preset.name(),
            "input_size": input_size,
            "output_size": output_size,
        });
        match serde_json::to_string_pretty(&json) {
            Ok(text) => eprintln!("{text}"),
            Err(e) => log::warn!("cannot render stats: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_encode(opts: &Options) -> i32 {
    let data = match read_input(opts.input_file.as_deref()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("base85: input: {e}");
            return 1;
        }
    };

    let encoding = opts.preset.encoding();
    let encoded = text::encode_with_options(&data, opts.encode_options, &encoding);

    if let Err(msg) = write_output(opts, &encoded) {
        eprintln!("base85: {msg}");
        return 1;
    }

    report(opts, "encode", data.len(), encoded.len());
    0
}

fn cmd_decode(opts: &Options) -> i32 {
    let data = match read_input(opts.input_file.as_deref()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("base85: input: {e}");
            return 1;
        }
    };

    let encoding = opts.preset.encoding();
    // Text from files and pipes usually ends with a newline.
    let trimmed = data.trim_ascii_end();
    let decoded = match text::decode_with_options(trimmed, opts.decode_options, &encoding) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("base85: decode error: {e}");
            return 1;
        }
    };

    if let Err(msg) = write_output(opts, &decoded) {
        eprintln!("base85: {msg}");
        return 1;
    }

    report(opts, "decode", data.len(), decoded.len());
    0
}

fn describe(encoding: &Encoding) -> String {
    let show = |bytes: Option<&[u8]>| match bytes {
        Some(b) => format!("\"{}\"", String::from_utf8_lossy(b)),
        None => "-".to_string(),
    };
    let marker = |m: Option<u8>| m.map_or_else(|| "-".to_string(), |b| format!("'{}'", b as char));
    format!(
        "start={} end={} zeros={} spaces={} symbols={}",
        show(encoding.start_delimiter()),
        show(encoding.end_delimiter()),
        marker(encoding.zero_run()),
        marker(encoding.space_run()),
        String::from_utf8_lossy(encoding.alphabet().symbols()),
    )
}

fn cmd_variants() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("base85 version {version}");
    for preset in Preset::ALL {
        println!("{preset:<8} {}", describe(&preset.encoding()));
    }
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let mut opts = resolve_options(cli);

    let default_filter = match opts.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    // Warn if -c overrides output filename.
    if opts.use_stdout
        && let Some(path) = opts.output_file.take()
        && !opts.quiet
    {
        eprintln!(
            "base85: warning: -c option overrides output filename: {}",
            path.display()
        );
    }

    let exit_code = match opts.command {
        Command::Encode => cmd_encode(&opts),
        Command::Decode => cmd_decode(&opts),
        Command::Variants => cmd_variants(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
