use parley::RespondResultVerbose;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, res: &RespondResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Responding: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    if res.details.triggered.is_empty() {
        println!("{}", palette.dim("  No triggers matched (empty-input short-circuit)"));
    }
    for name in &res.details.triggered {
        let marker = if *name == res.details.rule {
            palette.paint("✓", ansi::GREEN)
        } else {
            palette.dim("•")
        };
        println!("  {} {}", marker, palette.paint(name, ansi::BLUE));
    }

    println!("\n{}", palette.paint("━━━ Reply ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("rule:"), palette.paint(&res.details.rule, ansi::CYAN));
    for line in res.reply.lines() {
        println!("  {}", palette.bold(palette.paint(line, ansi::GREEN)));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", res.details.total), ansi::GREEN));
    println!();
}
