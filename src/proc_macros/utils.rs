use super::*;

/// Prints a `#[coroutine_fn]` expansion at compile time, `rustfmt`-ed and
/// highlighted when those are available.
#[cfg(feature = "verbose-expansions")]
pub(in crate)
fn pretty_print_tokenstream (
    code: &'_ TokenStream2,
)
{
    use ::std::{
        io::Write as _,
        process::{Command, Stdio},
    };

    let code = code.to_string();
    let rustfmt = || -> Option<String> {
        let mut child =
            Command::new("rustfmt")
                .args(&["--edition", "2018", "--emit", "stdout"])
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .spawn()
                .ok()?
        ;
        child.stdin.take()?.write_all(code.as_bytes()).ok()?;
        let output = child.wait_with_output().ok()?;
        if output.status.success().not() {
            return None;
        }
        String::from_utf8(output.stdout).ok()
    };
    let code = rustfmt().unwrap_or(code);

    if  ::bat::PrettyPrinter::new()
            .input_from_bytes(code.as_bytes())
            .language("rust")
            .true_color(false)
            .print()
            .is_err()
    {
        println!("{}", code);
    }
}
