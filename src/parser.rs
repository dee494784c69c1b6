//! Turns a token sequence into a command invocation.

/// A command name with its arguments, borrowed from the tokenized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

/// Builds an [`Invocation`] from `tokens`.
///
/// Returns `None` for an empty token sequence, which the loop treats as "nothing to do".
pub fn construct_invocation<'a>(tokens: &[&'a str]) -> Option<Invocation<'a>> {
    let (&name, args) = tokens.split_first()?;
    Some(Invocation {
        name,
        args: args.to_vec(),
    })
}
