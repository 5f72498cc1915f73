use calc::{get_opts, run_calc, run_repl, CalcResult};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};

fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let is_tty = atty::is(atty::Stream::Stderr);
    let use_color = is_tty && ch_stderr.supports_color();

    let opts = get_opts(|app| app.get_matches_safe(), use_color).unwrap_or_else(|e| e.exit());

    if opts.interactive {
        let stdin = io::stdin();
        let prompt = atty::is(atty::Stream::Stdin);
        run_repl(&opts, prompt, stdin.lock(), &mut ch_stdout, &mut ch_stderr)?;
        ch_stdout.flush()?;
        ch_stderr.flush()?;
        return Ok(());
    }

    let CalcResult {
        code,
        stdout,
        stderr,
        page,
    } = run_calc(opts);

    if !stderr.is_empty() {
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        print_stdout(&stdout, &mut ch_stdout, page)?;
    }

    std::process::exit(code)
}

/// Shows `stdout` through `$PAGER` when `page` is set, and prints it directly otherwise or when
/// the pager cannot be started.
fn print_stdout(
    stdout: &str,
    ch_stdout: &mut BufferedStandardStream,
    page: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut fallback_to_println = false;

    if page {
        let pager_name = env::var_os("PAGER")
            .unwrap_or_else(|| OsString::from(if cfg!(windows) { "more.com" } else { "less" }));

        match Command::new(pager_name).stdin(Stdio::piped()).spawn() {
            Ok(mut pager) => {
                if let Some(pipe) = pager.stdin.as_mut() {
                    if pipe.write_all(stdout.as_bytes()).is_err() {
                        fallback_to_println = true;
                    }
                }

                if pager.wait().is_err() {
                    fallback_to_println = true;
                }
            }
            Err(_) => {
                fallback_to_println = true;
            }
        }
    }

    if fallback_to_println || !page {
        writeln!(ch_stdout, "{}", stdout)?;
        ch_stdout.flush()?;
    }

    Ok(())
}

fn main() {
    let out = std::panic::catch_unwind(main_impl);

    match out {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
        Err(..) => {
            eprint!("\nnote: you found an internal calc error; this is a bug in calc.\n");
            std::process::exit(2);
        }
    }
}
