use mplocate::{DataWarning, Dataset, MatchSource, Resolution};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
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

pub fn print_resolution(res: &Resolution, dataset: &Dataset, warnings: &[DataWarning], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Resolving: \"{}\"", res.query), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Dataset ━━━", ansi::GRAY));
    print_dataset_summary(dataset, warnings, &palette);

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    if res.matches.is_empty() {
        println!("{}", palette.dim("  No representative found"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • The postcode area is not in the supplied area map");
        println!("  • The constituency has no representative in the dataset");
        println!("  • No searchable field contains the query text");
        println!("\n{}", palette.dim("  Tip: Set MPLOCATE_DEBUG=1 to trace the postcode path"));
    } else {
        print_matches(res, &palette);
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", res.elapsed), ansi::GREEN));
    println!();
}

fn print_dataset_summary(dataset: &Dataset, warnings: &[DataWarning], palette: &ansi::Palette) {
    println!(
        "  {} areas  │  {} representatives",
        palette.paint(dataset.area_count().to_string(), ansi::BLUE),
        palette.paint(dataset.representatives().len().to_string(), ansi::BLUE),
    );

    let unrepresented = dataset.unrepresented_constituencies();
    if !unrepresented.is_empty() {
        println!(
            "  {} {}",
            palette.paint(format!("⚠ {} unrepresented constituencies:", unrepresented.len()), ansi::YELLOW),
            palette.dim(preview_list(&unrepresented)),
        );
    }

    for warning in warnings {
        println!("  {}", palette.paint(format!("⚠ {warning}"), ansi::YELLOW));
    }
}

fn print_matches(res: &Resolution, palette: &ansi::Palette) {
    for (idx, m) in res.matches.iter().enumerate() {
        let rep = &m.representative;
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx + 1), ansi::GRAY),
            palette.bold(palette.paint(&rep.name, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("{} ({})", rep.constituency, rep.party), ansi::BLUE),
        );
        match &m.source {
            MatchSource::Postcode { area, constituency } => {
                println!(
                    "      {} {}  {} {}",
                    palette.dim("via postcode area"),
                    palette.paint(area, ansi::CYAN),
                    palette.dim("→"),
                    palette.paint(constituency, ansi::CYAN),
                );
            }
            MatchSource::Search { score } => {
                println!(
                    "      {} {}",
                    palette.dim("via search, score"),
                    palette.paint(score.to_string(), ansi::YELLOW),
                );
            }
        }
    }
}

fn preview_list(items: &[&str]) -> String {
    let shown = items.iter().take(3).copied().collect::<Vec<_>>().join(", ");
    if items.len() > 3 { format!("{shown}, ... +{} more", items.len() - 3) } else { shown }
}
