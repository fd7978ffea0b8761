use std::{env, fs, process};

use rill::codegen::{emit, Config, USAGE};

fn main() {
  let args: Vec<String> = env::args().skip(1).collect();
  if args.iter().any(|arg| arg == "-h" || arg == "--help") {
    println!("{}", USAGE);
    return;
  }
  let config = match Config::from_args(args) {
    Ok(config) => config,
    Err(err) => {
      eprintln!("rill-gen: {}", err);
      eprintln!("{}", USAGE);
      process::exit(2);
    }
  };
  let rendered = emit(&config);
  if let Err(err) = fs::write(&config.out, rendered) {
    eprintln!("rill-gen: {}: {}", config.out, err);
    process::exit(1);
  }
}
