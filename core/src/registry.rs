//! The fixed task table.

use crate::{Config, Error, Result};
use std::fmt;
use std::path::PathBuf;

/// Locales passed to `makemessages`.
pub const LOCALES: [&str; 3] = ["en", "ar", "he"];
pub const VERBOSITY: &str = "1";
pub const DOMAIN: &str = "django";

/// An external command with a fixed argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// Print the listing built from the declaration file.
    Help,
    /// Hand off to an external program and report its exit status.
    Delegate(Invocation),
}

/// A task invocable by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: &'static str,
    pub kind: TargetKind,
}

/// Registry of every task the runner knows about.
#[derive(Debug, Clone)]
pub struct Registry {
    targets: Vec<Target>,
}

impl Registry {
    /// Build the task table, taking program and directory from `config`.
    pub fn new(config: &Config) -> Self {
        let delegate = |args: Vec<String>| {
            TargetKind::Delegate(Invocation {
                program: config.django_admin.clone(),
                args,
                working_dir: config.working_dir.clone(),
            })
        };

        let mut extract_args = vec![String::from("makemessages")];
        for locale in LOCALES {
            extract_args.push(String::from("-l"));
            extract_args.push(locale.to_string());
        }
        extract_args.extend(["-v", VERBOSITY, "-d", DOMAIN].map(String::from));

        Self {
            targets: vec![
                Target {
                    name: "help",
                    kind: TargetKind::Help,
                },
                Target {
                    name: "extract_translations",
                    kind: delegate(extract_args),
                },
                Target {
                    name: "compile_messages",
                    kind: delegate(vec![String::from("compilemessages")]),
                },
            ],
        }
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.targets.iter().map(|target| target.name).collect()
    }

    /// Look up a task by name.
    pub fn find(&self, name: &str) -> Result<&Target> {
        self.targets
            .iter()
            .find(|target| target.name == name)
            .ok_or_else(|| Error::UnknownTask {
                name: name.to_string(),
                available: self.names().into_iter().map(String::from).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(registry: &Registry, name: &str) -> Invocation {
        match &registry.find(name).unwrap().kind {
            TargetKind::Delegate(inv) => inv.clone(),
            TargetKind::Help => panic!("{name} is not a delegated task"),
        }
    }

    #[test]
    fn lists_the_three_tasks() {
        let registry = Registry::new(&Config::default());
        assert_eq!(registry.names(), ["help", "extract_translations", "compile_messages"]);
        assert_eq!(registry.find("help").unwrap().kind, TargetKind::Help);
    }

    #[test]
    fn extract_translations_uses_fixed_arguments() {
        let inv = invocation(&Registry::new(&Config::default()), "extract_translations");
        assert_eq!(
            inv.to_string(),
            "django-admin makemessages -l en -l ar -l he -v 1 -d django"
        );
        assert_eq!(inv.working_dir, None);
    }

    #[test]
    fn compile_messages_has_no_extra_arguments() {
        let inv = invocation(&Registry::new(&Config::default()), "compile_messages");
        assert_eq!(inv.program, "django-admin");
        assert_eq!(inv.args, ["compilemessages"]);
    }

    #[test]
    fn program_and_directory_come_from_config() {
        let config = Config {
            django_admin: String::from("/opt/venv/bin/django-admin"),
            working_dir: Some(PathBuf::from("custom_reg_form")),
            ..Config::default()
        };
        let inv = invocation(&Registry::new(&config), "compile_messages");
        assert_eq!(inv.program, "/opt/venv/bin/django-admin");
        assert_eq!(inv.working_dir, Some(PathBuf::from("custom_reg_form")));
    }

    #[test]
    fn unknown_task_reports_available_names() {
        let registry = Registry::new(&Config::default());
        let err = registry.find("makemigrations").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown task `makemigrations`, available tasks: help, extract_translations, compile_messages"
        );
    }
}
