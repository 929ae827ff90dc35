//! Catalog of named errorformat definitions.

/// A named errorformat definition for one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fmt {
    /// Catalog key, e.g. `golint`.
    pub name: &'static str,
    /// Ordered rules.
    pub errorformat: &'static [&'static str],
    /// Short description of the tool.
    pub description: &'static str,
    /// Tool homepage.
    pub url: &'static str,
}

static DEFINED_FMTS: &[Fmt] = &[
    Fmt {
        name: "eslint-compact",
        errorformat: &[
            "%f: line %l, col %c, %trror - %m",
            "%f: line %l, col %c, %tarning - %m",
            "%-G%.%#",
        ],
        description: "(eslint -f compact) A fully pluggable tool for identifying and reporting on patterns in JavaScript",
        url: "https://github.com/eslint/eslint",
    },
    Fmt {
        name: "flake8",
        errorformat: &["%f:%l:%c: %t%n %m"],
        description: "Tool for python style guide enforcement",
        url: "https://flake8.pycqa.org/",
    },
    Fmt {
        name: "gcc",
        errorformat: &[
            "%f:%l:%c: %trror: %m",
            "%f:%l:%c: %tarning: %m",
            "%f:%l:%c: %tote: %m",
            "%f:%l: %trror: %m",
            "%-G%.%#",
        ],
        description: "GNU Compiler Collection",
        url: "https://gcc.gnu.org/",
    },
    Fmt {
        name: "golint",
        errorformat: &["%f:%l:%c: %m"],
        description: "linter for Go source code",
        url: "https://github.com/golang/lint",
    },
    Fmt {
        name: "govet",
        errorformat: &["%f:%l:%c: %m", "%f:%l: %m", "%-G%.%#"],
        description: "Vet examines Go source code and reports suspicious problems",
        url: "https://pkg.go.dev/cmd/vet",
    },
    Fmt {
        name: "hadolint",
        errorformat: &["%f:%l %m"],
        description: "Dockerfile Linter",
        url: "https://github.com/hadolint/hadolint",
    },
    Fmt {
        name: "mypy",
        errorformat: &["%f:%l:%c: %t%*[^:]: %m", "%f:%l: %t%*[^:]: %m"],
        description: "Optional static typing for Python",
        url: "https://mypy-lang.org/",
    },
    Fmt {
        name: "pylint",
        errorformat: &["%f:%l:%c: %t%n: %m"],
        description: "Python code static checker",
        url: "https://github.com/pylint-dev/pylint",
    },
    Fmt {
        name: "rubocop",
        errorformat: &["%f:%l:%c: %t: %m"],
        description: "(rubocop --format emacs) A Ruby static code analyzer",
        url: "https://github.com/rubocop/rubocop",
    },
    Fmt {
        name: "rustc",
        errorformat: &[
            "%E%trror[E%n]: %m",
            "%E%trror: %m",
            "%W%tarning: %m",
            "%C%*[ ]--> %f:%l:%c",
            "%-Z",
            "%-C%.%#",
        ],
        description: "Rust compiler human readable diagnostics (also cargo check / clippy)",
        url: "https://doc.rust-lang.org/rustc/",
    },
    Fmt {
        name: "shellcheck",
        errorformat: &[
            "%f:%l:%c: %trror: %m",
            "%f:%l:%c: %tarning: %m",
            "%f:%l:%c: %tote: %m",
        ],
        description: "(shellcheck -f gcc) A static analysis tool for shell scripts",
        url: "https://github.com/koalaman/shellcheck",
    },
    Fmt {
        name: "staticcheck",
        errorformat: &["%f:%l:%c: %m"],
        description: "Advanced Go linter",
        url: "https://staticcheck.dev/",
    },
    Fmt {
        name: "tsc",
        errorformat: &["%f(%l,%c): %trror TS%n: %m", "%f(%l,%c): %m"],
        description: "TypeScript compiler",
        url: "https://www.typescriptlang.org/",
    },
];

/// All catalog entries, sorted by name.
pub fn defined_fmts() -> &'static [Fmt] {
    DEFINED_FMTS
}

/// Looks up a catalog entry by name.
pub fn find(name: &str) -> Option<&'static Fmt> {
    DEFINED_FMTS.iter().find(|fmt| fmt.name == name)
}
