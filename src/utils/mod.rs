#[macro_use]
mod macros;

pub(in crate)
mod prelude;

use ::core::fmt;

/// Names a worker thread in log lines.
pub(in crate)
struct Label<'name> (
    pub(in crate) Option<&'name str>,
);

impl fmt::Display for Label<'_> {
    fn fmt (self: &'_ Self, f: &'_ mut fmt::Formatter<'_>)
      -> fmt::Result
    {
        f.write_str(self.0.unwrap_or("<unnamed>"))
    }
}
