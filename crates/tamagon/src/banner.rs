use colored::Colorize;

const NAME: &str = "tamagon";

pub fn print_banner_with_version() {
    println!(
        "{} {} {}",
        "🍊🍋🍇".bold(),
        NAME.bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
    println!("{}", env!("CARGO_PKG_DESCRIPTION").dimmed());
}
