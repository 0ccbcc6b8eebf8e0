use defcmd::prelude::*;
use defcmd::{Command, CommandLine, PropertyMap};

fn main() {
    let properties = PropertyMap::default();
    let mut command_line = session(properties.clone());

    for line in ["load=a.txt,b.txt", "-Dshell.echo=on info", "instal", "load"] {
        let args: Vec<&str> = line.split_whitespace().collect();
        // Failures are reported to stderr, along with any suggestions.
        let _ = command_line.parse_tokens_with(&args, &mut Echo);
    }

    println!("shell.echo={:?}", properties.get("shell.echo"));
}

fn session(properties: PropertyMap) -> CommandLine {
    let mut command_line = CommandLine::new("shell").unwrap().properties(properties);
    command_line
        .define("load, !file, ?files..., :\\w+\\.txt, #Load one or more text files.")
        .unwrap()
        .define("info, #Show the session information.")
        .unwrap()
        .define("install, !package, #Install a package.")
        .unwrap();
    command_line
}

struct Echo;

impl CommandListener for Echo {
    fn handle(&mut self, command: &Command) {
        println!("> {command}");
    }
}
