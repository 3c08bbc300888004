use colored::*;

pub fn debug_print(enabled: bool, emoji: &str, message: &str) {
    if enabled {
        println!("{} {}", emoji.green(), message.bright_blue());
    }
}
