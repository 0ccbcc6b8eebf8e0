use defcmd::CommandLine;

fn main() {
    let mut command_line = CommandLine::new("copier")
        .unwrap()
        .version("0.1.0")
        .unwrap();
    command_line
        .define("cp, copy, !source, !targets..., #Copy the source into each target.")
        .unwrap()
        .define("-v, --verbose, #Print each copy.")
        .unwrap();

    let commands = command_line.parse_env();
    let verbose = commands
        .iter()
        .any(|command| command.name() == "-v" || command.name() == "--verbose");
    let mut copies = 0;

    for command in &commands {
        if let Some(source) = command.value("source") {
            for target in command.values("targets").unwrap_or_default() {
                if verbose {
                    println!("{source} -> {target}");
                }

                copies += 1;
            }
        }
    }

    println!("Copies: {copies}");
}
