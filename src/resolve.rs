//! Alias resolution from user-facing names to canonical command names.

use crate::strategy::GNU_COREUTILS;

/// Exact-match aliases, checked before the pattern rule.
const ALIASES: &[(&str, &str)] = &[
    ("golang", "go"),
    ("jre", "java"),
    ("jdk", "javac"),
    ("nodejs", "node"),
    ("goreplay", "gor"),
    ("httpie", "http"),
    ("homebrew", "brew"),
    ("awsebcli", "eb"),
    ("awscli", "aws"),
];

/// Resolve a user-supplied name to the canonical executable name.
///
/// This function is total: unknown names pass through unchanged as their
/// own canonical form, and resolving an already-canonical name returns it
/// unchanged.
///
/// Resolution order:
/// 1. exact-match alias table (e.g. `golang` -> `go`, `jre` -> `java`);
/// 2. coreutils pattern rule: any name ending in `coreutils`, or starting
///    with `linux` and containing `utils`, resolves to the sentinel
///    [`GNU_COREUTILS`] command;
/// 3. identity.
///
/// # Example
///
/// ```rust
/// use toolver::resolve;
///
/// assert_eq!(resolve("golang"), "go");
/// assert_eq!(resolve("git"), "git");
/// ```
pub fn resolve(name: &str) -> String {
    for (alias, canonical) in ALIASES {
        if name == *alias {
            return (*canonical).to_string();
        }
    }

    if name.ends_with("coreutils") || (name.starts_with("linux") && name.contains("utils")) {
        return GNU_COREUTILS.to_string();
    }

    name.to_string()
}
