use vergen_git2::{CargoBuilder, Emitter, Git2Builder, RustcBuilder};

fn main() -> anyhow::Result<()> {
    // env var names cannot contain dashes so those become underscores as well
    println!(
        "cargo::rustc-env=CARGO_PKG_NAME_UPPERCASE={}",
        env!("CARGO_PKG_NAME").to_ascii_uppercase().replace('-', "_")
    );

    let git2 = Git2Builder::default().sha(true).build()?;

    let cargo = CargoBuilder::default()
        .debug(true)
        .target_triple(true)
        .build()?;

    let rustc = RustcBuilder::default().semver(true).build()?;

    // outside a git checkout the git values are placeholders
    Emitter::default()
        .add_instructions(&git2)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()
}
