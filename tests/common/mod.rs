// Shared helpers for integration tests.
//
// Installs fake `a2enconf` / `a2disconf` shell scripts into a temporary
// directory. The scripts keep their state in `conf-available/` and
// `conf-enabled/` next to them and print the same messages as the Debian
// helpers, so tests can drive real processes without an Apache install.
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt as _;
use std::path::{Path, PathBuf};

use apache2_config::exec::SearchPath;

const A2ENCONF: &str = r#"#!/bin/sh
root='@ROOT@'
name="$1"
if [ ! -e "$root/conf-available/$name.conf" ]; then
    echo "ERROR: Conf $name does not exist!"
    exit 1
fi
if [ -e "$root/conf-enabled/$name.conf" ]; then
    echo "Conf $name already enabled"
    exit 0
fi
: > "$root/conf-enabled/$name.conf"
echo "Enabling conf $name."
echo "To activate the new configuration, you need to run:"
echo "  service apache2 reload"
"#;

const A2DISCONF: &str = r#"#!/bin/sh
root='@ROOT@'
name="$1"
if [ ! -e "$root/conf-available/$name.conf" ]; then
    echo "ERROR: Conf $name does not exist!"
    exit 1
fi
if [ ! -e "$root/conf-enabled/$name.conf" ]; then
    echo "Conf $name already disabled"
    exit 0
fi
rm -f "$root/conf-enabled/$name.conf"
echo "Conf $name disabled."
echo "To activate the new configuration, you need to run:"
echo "  service apache2 reload"
"#;

/// A throwaway Apache configuration tree with fake helper tools.
pub struct FakeApache {
    /// Temporary directory holding `bin/`, `conf-available/`, `conf-enabled/`.
    pub root: tempfile::TempDir,
}

impl FakeApache {
    /// Create a tree with both tools installed.
    pub fn new() -> Self {
        let fake = Self::without_tools();
        fake.install_tool("a2enconf", A2ENCONF);
        fake.install_tool("a2disconf", A2DISCONF);
        fake
    }

    /// Create a tree with an empty `bin/` directory.
    pub fn without_tools() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        for dir in ["bin", "conf-available", "conf-enabled"] {
            fs::create_dir_all(root.path().join(dir)).expect("create fake apache dir");
        }
        Self { root }
    }

    /// Create a tree with only `a2enconf` installed.
    pub fn with_enable_only() -> Self {
        let fake = Self::without_tools();
        fake.install_tool("a2enconf", A2ENCONF);
        fake
    }

    fn install_tool(&self, name: &str, template: &str) {
        let path = self.bin_dir().join(name);
        let script = template.replace("@ROOT@", &self.root.path().display().to_string());
        fs::write(&path, script).expect("write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake tool");
    }

    /// Directory containing the fake tools.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    /// Search path containing only the fake tools.
    pub fn search_path(&self) -> SearchPath {
        SearchPath::new(vec![self.bin_dir()])
    }

    /// `PATH` value with the fake tools first, followed by the system
    /// directories the scripts need.
    pub fn path_var(&self) -> String {
        format!("{}:/usr/bin:/bin", self.bin_dir().display())
    }

    /// Make `name` available to the tools (disabled).
    pub fn add_available(&self, name: &str) {
        fs::write(self.conf_path("conf-available", name), "# test\n").expect("write conf");
    }

    /// Whether `name` is currently enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.conf_path("conf-enabled", name).exists()
    }

    fn conf_path(&self, dir: &str, name: &str) -> PathBuf {
        self.root.path().join(dir).join(format!("{name}.conf"))
    }

    /// Root of the tree.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}
