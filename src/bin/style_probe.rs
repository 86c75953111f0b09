// Prints every base style applied to the given text.
// Run with: cargo run --bin style_probe -- "your text"
use style_core::Registries;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() { "Shivam instagram".to_string() } else { args.join(" ") };

    let registries = Registries::standard();
    for (i, base) in registries.base_styles().iter().enumerate() {
        println!("{:>2} {:<14} => {}", i, base.name, base.apply(&text));
    }
}
