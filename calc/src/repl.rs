//! Line-oriented interactive mode.

use crate::{emit_calc_diagnostics, emit_calc_error, eval_bindings, Opts};

use libcalc::{
    format_complex, parse_binding, Bindings, CalcError, Diagnostic, Outcome, Pending, Session,
};

use std::io::{self, BufRead, Write};

const HELP: &str = "\
Enter an expression to compute it, like \"(2+3i)*(1-i)\" or \"x+1 equal 1+x\".
Free variables are prompted for by their real and imaginary parts.

Commands:
  history  show the last computations, most recent first
  clear    forget the history
  help     show this message
  quit     leave calc

A line that is exactly a command name runs the command. To compute a variable with the same
name, write it so the line is not a bare word, like \"(history)\" or \"clear + 0\".";

/// Reads expressions from `input` line by line and computes each of them in a shared session,
/// writing results to `stdout` and diagnostics to `stderr`.
///
/// Variables bound with `--var` in `opts` are used whenever an expression needs them; any other
/// free variable is read from `input` as a real part line and an imaginary part line. Prompts are
/// written only when `prompt` is set.
pub fn run_repl<R, O, E>(
    opts: &Opts,
    prompt: bool,
    input: R,
    stdout: &mut O,
    stderr: &mut E,
) -> io::Result<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut repl = Repl {
        color: opts.color,
        prompt,
        lines: input.lines(),
        stdout,
        stderr,
    };

    let bindings = match eval_bindings(&opts.bindings) {
        Ok(bindings) => bindings,
        Err(diagnostic) => return repl.diagnostic(diagnostic),
    };
    let mut session = Session::new();

    while let Some(line) = repl.read_line("> ")? {
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(repl.stdout, "{}", HELP)?,
            "history" => {
                for entry in session.history() {
                    writeln!(repl.stdout, "{} = {}", entry.expression, entry.result)?;
                }
            }
            "clear" => session.clear_history(),
            expression => {
                let outcome = match session.submit(expression, &bindings) {
                    Ok(Outcome::NeedsBindings(pending)) => {
                        match repl.read_bindings(&pending)? {
                            Some(Ok(bound)) => session.resume(pending, &bound),
                            Some(Err(err)) => Err(err),
                            // Input ran out mid-binding.
                            None => break,
                        }
                    }
                    outcome => outcome,
                };
                match outcome {
                    Ok(Outcome::Value(value)) => writeln!(repl.stdout, "{}", format_complex(value))?,
                    Ok(Outcome::Verdict(verdict)) => writeln!(repl.stdout, "{}", verdict)?,
                    Ok(Outcome::NeedsBindings(_)) => {}
                    Err(err) => repl.error(&err)?,
                }
            }
        }
        repl.stdout.flush()?;
    }
    Ok(())
}

struct Repl<'a, R, O, E> {
    color: bool,
    prompt: bool,
    lines: io::Lines<R>,
    stdout: &'a mut O,
    stderr: &'a mut E,
}

impl<R: BufRead, O: Write, E: Write> Repl<'_, R, O, E> {
    /// Reads the next line, or `None` at the end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.prompt {
            write!(self.stdout, "{}", prompt)?;
            self.stdout.flush()?;
        }
        self.lines.next().transpose()
    }

    /// Reads values for the unbound variables of `pending`.
    fn read_bindings(
        &mut self,
        pending: &Pending,
    ) -> io::Result<Option<Result<Bindings, CalcError>>> {
        let mut bindings = Bindings::new();
        for var in pending.variables.iter() {
            let real = match self.read_line(&format!("{} real: ", var))? {
                Some(real) => real,
                None => return Ok(None),
            };
            let imag = match self.read_line(&format!("{} imag: ", var))? {
                Some(imag) => imag,
                None => return Ok(None),
            };
            match parse_binding(var, &real, &imag) {
                Ok(value) => {
                    bindings.insert(var.clone(), value);
                }
                Err(err) => return Ok(Some(Err(err))),
            }
        }
        Ok(Some(Ok(bindings)))
    }

    fn error(&mut self, err: &CalcError) -> io::Result<()> {
        write!(self.stderr, "{}", emit_calc_error(err, self.color))?;
        self.stderr.flush()
    }

    fn diagnostic(&mut self, diagnostic: Diagnostic) -> io::Result<()> {
        write!(
            self.stderr,
            "{}",
            emit_calc_diagnostics(&[diagnostic], self.color)
        )?;
        self.stderr.flush()
    }
}
