//! Static strategy table mapping canonical commands to probing recipes.
//!
//! Most commands share one of five standard flag strategies and differ only
//! in which argument triggers the version banner. The handful of commands
//! with awkward output or exit conventions carry an explicit override record
//! instead of special cases inside the engine.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Sentinel canonical command for the GNU coreutils family.
///
/// There is no binary by this name; its strategy probes an always-present
/// member tool of the family instead.
pub const GNU_COREUTILS: &str = "gnu_coreutils";

/// Which part of the captured output the version pattern is applied to.
///
/// `line` restricts scanning to a single 0-based line of the merged output;
/// `leading_space` narrows the pattern to numbers preceded by whitespace,
/// which skips decoy figures like revision ids and elapsed times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extraction {
    pub line: Option<usize>,
    pub leading_space: bool,
}

/// How to probe one canonical command.
#[derive(Debug, Clone, Copy)]
pub struct ProbeStrategy {
    /// The single argument passed to the command (e.g. `--version`).
    pub arg: &'static str,
    /// Alternate binary to run instead of the canonical name.
    pub run: Option<&'static str>,
    /// Extraction overrides applied before the version pattern.
    pub extraction: Extraction,
    /// Remaps the raw exit status before classification, for tools whose
    /// exit convention is inverted.
    pub remap_status: Option<fn(i32) -> i32>,
    /// Environment variables removed from the child process, for tools
    /// whose output shifts under ambient toggles.
    pub scrub_env: &'static [&'static str],
}

impl ProbeStrategy {
    const fn flag(arg: &'static str) -> Self {
        Self {
            arg,
            run: None,
            extraction: Extraction { line: None, leading_space: false },
            remap_status: None,
            scrub_env: &[],
        }
    }
}

/// Fallback strategy used for unlisted commands when unsafe mode is on.
pub static DEFAULT_STRATEGY: ProbeStrategy = ProbeStrategy::flag("--version");

/// Commands answering the conventional `--version` flag.
const LONG_VERSION: &[&str] = &[
    // shells
    "bash", "zsh", "fish", "tcsh",
    // version control
    "git", "svn", "hg", "bzr",
    // package and system managers
    "brew", "apt", "apt-get", "dpkg", "yum", "dnf", "pacman", "snap",
    // build tools
    "make", "cmake", "ninja", "autoconf", "automake", "mvn", "gradle", "lein",
    // compilers and toolchains
    "gcc", "g++", "clang", "rustc", "cargo", "rustup",
    // javascript
    "node", "npm", "npx", "yarn", "pnpm", "deno", "bun",
    // python / ruby / perl
    "python", "python3", "pip", "pip3", "ruby", "gem", "bundler", "perl",
    // containers and infra
    "docker", "podman", "kubectl", "helm", "minikube", "vagrant", "packer",
    "ansible", "terraform",
    // cloud CLIs
    "aws", "eb", "gcloud", "az", "heroku", "netlify", "doctl",
    // network and data tools
    "curl", "wget", "http", "jq", "yq", "rsync",
    // editors
    "vim", "nvim", "emacs", "nano", "code",
    // misc
    "rg", "fzf", "screen", "md5sum", "tar", "gpg",
];

/// JVM-family tools that take a single-dash `-version`.
const SINGLE_DASH_VERSION: &[&str] = &["java", "javac", "kotlin", "ant"];

/// Commands probed with `-v`.
const LOWER_V: &[&str] = &["php", "rvm"];

/// Commands probed with `-V`.
const UPPER_V: &[&str] = &["ssh", "psql", "tmux"];

/// Commands taking a bare `version` sub-argument.
const VERSION_SUBCOMMAND: &[&str] = &["go", "hugo", "openssl"];

/// gor exits 1 on a healthy `gor version` probe; flip it into the
/// conventional space before classification.
fn invert_gor_status(status: i32) -> i32 {
    match status {
        1 => 0,
        0 => 1,
        other => other,
    }
}

static TABLE: LazyLock<HashMap<&'static str, ProbeStrategy>> = LazyLock::new(|| {
    let mut table = HashMap::new();

    let groups: &[(&[&str], &'static str)] = &[
        (LONG_VERSION, "--version"),
        (SINGLE_DASH_VERSION, "-version"),
        (LOWER_V, "-v"),
        (UPPER_V, "-V"),
        (VERSION_SUBCOMMAND, "version"),
    ];
    for &(names, arg) in groups {
        for &name in names {
            table.insert(name, ProbeStrategy::flag(arg));
        }
    }

    // hub prints git's version on line 1 and its own on line 2; scan line 2
    // and anchor the number to the preceding space.
    table.insert(
        "hub",
        ProbeStrategy {
            arg: "--version",
            extraction: Extraction { line: Some(1), leading_space: true },
            ..ProbeStrategy::flag("--version")
        },
    );

    // gor's version probe exits 1 when healthy.
    table.insert(
        "gor",
        ProbeStrategy {
            arg: "version",
            remap_status: Some(invert_gor_status),
            ..ProbeStrategy::flag("version")
        },
    );

    // The JVM echoes a "Picked up JAVA_TOOL_OPTIONS" banner when that
    // variable is set, shifting scala's version line down; scrub it so the
    // line position stays fixed.
    table.insert(
        "scala",
        ProbeStrategy {
            arg: "-version",
            extraction: Extraction { line: Some(1), leading_space: false },
            scrub_env: &["JAVA_TOOL_OPTIONS"],
            ..ProbeStrategy::flag("-version")
        },
    );

    // ApacheBench's banner carries a decoy revision number on the version
    // line; requiring a leading space matches the real version first.
    table.insert(
        "ab",
        ProbeStrategy {
            arg: "-V",
            extraction: Extraction { line: None, leading_space: true },
            ..ProbeStrategy::flag("-V")
        },
    );

    // Family sentinel: there is no gnu_coreutils binary, so probe md5sum,
    // which ships with every coreutils install.
    table.insert(
        GNU_COREUTILS,
        ProbeStrategy {
            run: Some("md5sum"),
            ..ProbeStrategy::flag("--version")
        },
    );

    table
});

/// Look up the probing strategy for a canonical command.
///
/// Returns `None` for commands absent from the table; the caller decides
/// between the unsafe-mode fallback ([`DEFAULT_STRATEGY`]) and rejecting the
/// request without spawning anything.
pub fn lookup(command: &str) -> Option<&'static ProbeStrategy> {
    TABLE.get(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_total_for_listed_groups() {
        for names in [
            LONG_VERSION,
            SINGLE_DASH_VERSION,
            LOWER_V,
            UPPER_V,
            VERSION_SUBCOMMAND,
        ] {
            for name in names {
                assert!(lookup(name).is_some(), "missing strategy for {name}");
            }
        }
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let first = lookup("git").unwrap();
        let second = lookup("git").unwrap();
        assert_eq!(first.arg, second.arg);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_flag_groups_carry_expected_args() {
        assert_eq!(lookup("git").unwrap().arg, "--version");
        assert_eq!(lookup("java").unwrap().arg, "-version");
        assert_eq!(lookup("php").unwrap().arg, "-v");
        assert_eq!(lookup("ssh").unwrap().arg, "-V");
        assert_eq!(lookup("go").unwrap().arg, "version");
    }

    #[test]
    fn test_unknown_command_misses() {
        assert!(lookup("definitely-not-a-real-tool").is_none());
    }

    #[test]
    fn test_hub_scans_second_line() {
        let strategy = lookup("hub").unwrap();
        assert_eq!(strategy.extraction.line, Some(1));
        assert!(strategy.extraction.leading_space);
    }

    #[test]
    fn test_gor_inverts_exit_status() {
        let strategy = lookup("gor").unwrap();
        let remap = strategy.remap_status.expect("gor remaps its status");
        assert_eq!(remap(1), 0);
        assert_eq!(remap(0), 1);
        assert_eq!(remap(127), 127);
    }

    #[test]
    fn test_scala_scrubs_jvm_toggle() {
        let strategy = lookup("scala").unwrap();
        assert_eq!(strategy.scrub_env, &["JAVA_TOOL_OPTIONS"]);
        assert_eq!(strategy.extraction.line, Some(1));
    }

    #[test]
    fn test_ab_requires_leading_space() {
        let strategy = lookup("ab").unwrap();
        assert!(strategy.extraction.leading_space);
        assert_eq!(strategy.extraction.line, None);
    }

    #[test]
    fn test_coreutils_sentinel_probes_member_tool() {
        let strategy = lookup(GNU_COREUTILS).unwrap();
        assert_eq!(strategy.run, Some("md5sum"));
        assert_eq!(strategy.arg, "--version");
    }

    #[test]
    fn test_every_alias_target_has_a_strategy() {
        // Every canonical name the resolver can produce must be probeable.
        for name in ["go", "java", "javac", "node", "gor", "http", "brew", "eb", "aws"] {
            assert!(lookup(name).is_some(), "alias target {name} unlisted");
        }
        assert!(lookup(GNU_COREUTILS).is_some());
    }

    #[test]
    fn test_default_strategy_is_long_version() {
        assert_eq!(DEFAULT_STRATEGY.arg, "--version");
        assert!(DEFAULT_STRATEGY.run.is_none());
    }
}
