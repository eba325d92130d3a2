use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("filmwiki")
        .version("1.0.0")
        .author("Filmwiki Contributors")
        .about("Render movie catalogs into wiki pages")
        .arg(clap::arg!(<CATALOG> "Catalog JSON file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <DIR> "Output directory (default: from config, else current directory)")
                .value_name("DIR")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-d --dialect <DIALECT> "Wiki dialect")
                .value_name("DIALECT")
                .value_parser(["dokuwiki", "markdown", "obsidian"]),
        )
        .arg(clap::arg!(-l --language <CODE> "Wiki language code; 'en' selects English, anything else German"))
        .arg(
            clap::arg!(--config <FILE> "Configuration file")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--no_navigation "Do not transclude the navigation page into articles"))
        .arg(clap::arg!(--dry_run "Print the pages that would be written without writing them"))
        .arg(clap::arg!(--stdout "Print page contents to stdout instead of writing files"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "filmwiki", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "filmwiki", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "filmwiki", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "filmwiki", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
