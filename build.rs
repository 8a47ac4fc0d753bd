use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap_complete::{generate_to, shells::Shell};

include!("src/options/args.rs");

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!("Failed to create directory {dir:?}, encountered error {err:?}. Aborting...");
    }

    res
}

fn generate_completions() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/memviz/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/memviz/manpage/";

    let completion_out_dir = PathBuf::from(COMPLETION_DIR);
    let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

    create_dir(&completion_out_dir)?;
    create_dir(&manpage_out_dir)?;

    // Generate completions
    let mut app = build_cmd();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        generate_to(shell, &mut app, "memviz", &completion_out_dir)?;
    }

    // Generate manpage
    let app = app.name("memviz");
    let man = clap_mangen::Man::new(app);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(manpage_out_dir.join("memviz.1"), buffer)?;

    Ok(())
}

fn main() -> Result<()> {
    const ENV_KEY: &str = "MEMVIZ_GENERATE";

    match env::var_os(ENV_KEY) {
        Some(var) if !var.is_empty() => {
            generate_completions()?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed={ENV_KEY}");
    println!("cargo:rerun-if-changed=src/options/args.rs");

    Ok(())
}
