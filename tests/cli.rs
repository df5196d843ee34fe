use assert_cmd::Command;
use gruvbox_icons_core::config::{colors::ColorTable, Config};
use std::path::Path;

fn gruvbox_icons(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gruvbox-icons").unwrap();
    cmd.current_dir(workdir)
        .env_remove("GRUVBOX_ICONS_CONFIG")
        .env("GRUVBOX_ICONS_CONFIG_FILE", workdir.join("config.toml"));
    cmd
}

fn write_config(workdir: &Path, config: &str) {
    std::fs::write(workdir.join("config.toml"), config).unwrap();
}

fn create_dirs(root: &Path, folders: &[&str]) {
    for folder in folders {
        std::fs::create_dir_all(root.join(folder)).unwrap();
    }
}

#[test]
fn should_generate_index_files() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(tmp.path(), "");
    create_dirs(
        &tmp.path().join("mint-l-icons-gruvbox-dark"),
        &[
            "Mint-L-Gruvbox/places/16",
            "Mint-L-Gruvbox/places/16@2x",
            "Mint-L-Gruvbox/places/scalable",
            "Mint-L-Gruvbox/places/foo",
        ],
    );

    gruvbox_icons(tmp.path()).arg("index").assert().success();

    let index = std::fs::read_to_string(
        tmp.path()
            .join("mint-l-icons-gruvbox-dark")
            .join("Mint-L-Gruvbox")
            .join("index.theme"),
    )
    .unwrap();
    assert_eq!(
        index,
        "[Icon Theme]\n\
         Name=Mint-L-Gruvbox\n\
         Comment=Mint-L Gruvbox icon theme variant\n\
         Inherits=hicolor\n\
         Directories=places/16;places/16@2x;places/scalable\n\
         \n\
         [places/16]\n\
         Size=16\n\
         Type=Fixed\n\
         Context=Places\n\
         \n\
         [places/16@2x]\n\
         Size=16\n\
         Type=Fixed\n\
         Scale=2\n\
         Context=Places\n\
         \n\
         [places/scalable]\n\
         Size=16\n\
         Type=Scalable\n\
         MinSize=16\n\
         MaxSize=512\n\
         Context=Places\n"
    );
}

#[test]
fn should_print_index_in_dry_run() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(tmp.path(), "[index]\ntheme-glob = \"Gruvbox*\"\n");
    create_dirs(tmp.path(), &["icons/Gruvbox-Light/apps/48"]);

    let output = gruvbox_icons(tmp.path())
        .args(["index", "--root", "icons", "--dry-run"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("(dry-run) ---\n[Icon Theme]\nName=Gruvbox-Light\n"));
    assert!(stdout.contains("[apps/48]\nSize=48\nType=Fixed\nContext=Apps\n"));
    assert!(!tmp
        .path()
        .join("icons")
        .join("Gruvbox-Light")
        .join("index.theme")
        .exists());
}

#[test]
fn should_succeed_without_matching_themes() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(tmp.path(), "");
    create_dirs(tmp.path(), &["icons/Other/apps/48"]);

    let output = gruvbox_icons(tmp.path())
        .args(["index", "--root", "icons"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No theme directories matching Mint-L*"));
    assert!(!tmp
        .path()
        .join("icons")
        .join("Other")
        .join("index.theme")
        .exists());
}

#[test]
fn should_generate_color_variants() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(tmp.path(), "");
    let template = "<svg><path style=\"fill:#8bb158\"/></svg>\n";
    std::fs::write(tmp.path().join("green.svg"), template).unwrap();

    gruvbox_icons(tmp.path()).arg("colors").assert().success();

    let svgs = std::fs::read_dir(tmp.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "svg"))
        .count();
    assert_eq!(svgs, 18);
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("red124.svg")).unwrap(),
        "<svg><path style=\"fill:#cc241d\"/></svg>\n"
    );
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("green.svg")).unwrap(),
        template
    );
}

#[test]
fn should_fail_colors_without_source() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(tmp.path(), "");

    gruvbox_icons(tmp.path()).arg("colors").assert().failure();

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn should_print_active_config() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(tmp.path(), "[index]\ninherits = \"Mint-L;hicolor\"\n");

    let output = gruvbox_icons(tmp.path()).arg("config").output().unwrap();

    assert!(output.status.success());
    let printed = Config::parse(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(printed.index.inherits, "Mint-L;hicolor");
    assert_eq!(printed.colors.table, ColorTable::default());
    assert_eq!(printed.index.theme_glob, "Mint-L*");
}

#[test]
fn should_fail_on_invalid_config() {
    let tmp = tempfile::TempDir::new().unwrap();
    write_config(tmp.path(), "[colors.table]\nred124 = \"nope\"\n");

    gruvbox_icons(tmp.path()).arg("config").assert().failure();
}
