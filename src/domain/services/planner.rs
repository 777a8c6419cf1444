//! Deployment planning service
//!
//! Turns an installer request into an ordered [`DeploymentPlan`]. Planning
//! only reads: it lists source directories, parses templates and checks
//! which optional destinations exist. Conflict decisions happen later, when
//! the plan is executed.

use std::path::{Path, PathBuf};

use crate::domain::entities::{ArtifactEntry, DeploymentPlan, RequiredSettings};
use crate::domain::ports::FileSystem;
use crate::domain::services::template;
use crate::domain::value_objects::{Agent, HomeDirs, KitLayout};
use crate::error::{KitError, KitResult};

const PROMPT_PREFIX: &str = "rpikit.";
const PROMPT_SUFFIX: &str = ".prompt.md";
const PROMPT_USAGE: &str = "USAGE.md";
const INSTRUCTIONS_SUFFIX: &str = ".instructions.md";

/// Width agent names are padded to inside `[agent ]` labels
const AGENT_LABEL_WIDTH: usize = 7;

/// What `rpi-kit user` should install
#[derive(Debug, Clone, PartialEq)]
pub struct UserRequest {
    pub agents: Vec<Agent>,
    pub vscode: bool,
    pub settings: RequiredSettings,
}

impl Default for UserRequest {
    fn default() -> Self {
        Self {
            agents: Agent::ALL.to_vec(),
            vscode: true,
            settings: RequiredSettings::vscode_defaults(),
        }
    }
}

/// What `rpi-kit project` should install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub root: PathBuf,
    pub copilot: bool,
}

/// A file found under a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceFile {
    path: PathBuf,
    /// `/`-separated path relative to the listed directory
    relative: String,
}

impl SourceFile {
    fn file_name(&self) -> &str {
        self.relative
            .rsplit('/')
            .next()
            .unwrap_or(self.relative.as_str())
    }
}

pub struct DeploymentPlanner<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    kit: &'a KitLayout,
}

impl<'a, F: FileSystem + ?Sized> DeploymentPlanner<'a, F> {
    pub fn new(fs: &'a F, kit: &'a KitLayout) -> Self {
        Self { fs, kit }
    }

    /// Every file under `skills/` into `target`, labelled by relative path.
    pub fn plan_skills(&self, target: &Path) -> KitResult<DeploymentPlan> {
        let source = self.kit.skills_dir();
        if !self.fs.is_dir(&source) {
            return Err(KitError::SourceNotFound { path: source });
        }

        let mut plan = DeploymentPlan::new();
        for file in self.list_sorted(&source)? {
            let destination = target.join(&file.relative);
            plan.artifact(ArtifactEntry::file(file.path, destination, file.relative));
        }
        Ok(plan)
    }

    /// Skills per agent, then VS Code settings, prompts and instructions for
    /// the user directory and every profile.
    pub fn plan_user(&self, homes: &HomeDirs, request: &UserRequest) -> KitResult<DeploymentPlan> {
        let mut plan = DeploymentPlan::new();

        plan.section("Skills");
        let skills_source = self.kit.skills_dir();
        let skills = if self.fs.is_dir(&skills_source) {
            Some(self.list_sorted(&skills_source)?)
        } else {
            None
        };

        for agent in &request.agents {
            plan.note(format!("Agent: {agent}"));
            let Some(files) = &skills else {
                plan.warn(format!("skills source not found: {}", skills_source.display()));
                continue;
            };

            let root = agent.skills_dir(homes.home());
            let tag = format!("{:<width$}", agent.as_str(), width = AGENT_LABEL_WIDTH);
            for file in files {
                plan.artifact(ArtifactEntry::file(
                    &file.path,
                    root.join(&file.relative),
                    format!("[{tag}] {}", file.relative),
                ));
            }
        }

        if !request.vscode {
            return Ok(plan);
        }

        let user_dir = homes.vscode_user().to_path_buf();
        let mut vscode_dirs = vec![user_dir.clone()];
        vscode_dirs.extend(self.fs.list_dirs(&user_dir.join("profiles"))?);

        plan.section("VS Code settings");
        for dir in &vscode_dirs {
            let settings = dir.join("settings.json");
            // Profiles without their own settings.json inherit the user one
            if *dir == user_dir || self.fs.exists(&settings) {
                plan.settings(&settings, request.settings.clone());
            }
        }

        plan.section("VS Code prompts");
        self.plan_vscode_files(
            &mut plan,
            &self.kit.prompts_dir(),
            &vscode_dirs,
            "prompts",
            is_prompt_file,
        )?;

        plan.section("VS Code instructions");
        self.plan_vscode_files(
            &mut plan,
            &self.kit.instructions_dir(),
            &vscode_dirs,
            "instructions",
            is_instructions_file,
        )?;

        Ok(plan)
    }

    /// Core `.rpi/` files and, with `copilot`, the rendered instructions
    /// template and workspace settings.
    pub fn plan_project(&self, request: &ProjectRequest) -> KitResult<DeploymentPlan> {
        let root = &request.root;
        if !self.fs.is_dir(root) {
            return Err(KitError::configuration(format!(
                "Target directory does not exist: {}",
                root.display()
            )));
        }

        let mut plan = DeploymentPlan::new();

        plan.section("Core");
        plan.artifact(ArtifactEntry::file(
            self.kit.project_agents_md(),
            root.join(".rpi").join("AGENTS.md"),
            ".rpi/AGENTS.md",
        ));
        plan.artifact(
            ArtifactEntry::content(
                "",
                root.join(".rpi").join("projects").join(".gitkeep"),
                ".rpi/projects/.gitkeep",
            )
            .create_only(),
        );

        if !request.copilot {
            return Ok(plan);
        }

        plan.section("Copilot");
        let template_path = self.kit.copilot_template();
        if self.fs.exists(&template_path) {
            let content = self.fs.read_to_string(&template_path)?;
            let extracted = template::extract_template(&content, &template_path)?;
            let destination = template::resolve_target(root, &extracted.target, &template_path)?;
            plan.artifact(ArtifactEntry::content(
                extracted.body,
                destination,
                extracted.target,
            ));
        } else {
            plan.warn(format!(
                "Copilot instructions template not found: {}",
                template_path.display()
            ));
        }

        plan.artifact(
            ArtifactEntry::file(
                self.kit.project_vscode_settings(),
                root.join(".vscode").join("settings.json"),
                ".vscode/settings.json",
            )
            .create_only(),
        );

        Ok(plan)
    }

    fn plan_vscode_files(
        &self,
        plan: &mut DeploymentPlan,
        source: &Path,
        vscode_dirs: &[PathBuf],
        kind: &str,
        accept: fn(&str) -> bool,
    ) -> KitResult<()> {
        if !self.fs.is_dir(source) {
            plan.warn(format!("{kind} source not found: {}", source.display()));
            return Ok(());
        }

        let files: Vec<SourceFile> = self
            .list_sorted(source)?
            .into_iter()
            .filter(|f| accept(f.file_name()))
            .collect();

        for dir in vscode_dirs {
            let destination_dir = dir.join(kind);
            for file in &files {
                let name = file.file_name();
                plan.artifact(ArtifactEntry::file(
                    &file.path,
                    destination_dir.join(name),
                    format!("[vscode/{kind}] {name}"),
                ));
            }
        }
        Ok(())
    }

    /// Files under `dir`, ordered by their `/`-separated relative path
    fn list_sorted(&self, dir: &Path) -> KitResult<Vec<SourceFile>> {
        let mut files: Vec<SourceFile> = self
            .fs
            .list_files(dir)?
            .into_iter()
            .filter_map(|path| {
                let relative = relative_label(dir, &path)?;
                Some(SourceFile { path, relative })
            })
            .collect();
        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(files)
    }
}

fn relative_label(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// `rpikit.<anything>.prompt.md` or `USAGE.md`
fn is_prompt_file(name: &str) -> bool {
    if name == PROMPT_USAGE {
        return true;
    }
    name.len() >= PROMPT_PREFIX.len() + PROMPT_SUFFIX.len()
        && name.starts_with(PROMPT_PREFIX)
        && name.ends_with(PROMPT_SUFFIX)
}

fn is_instructions_file(name: &str) -> bool {
    name.ends_with(INSTRUCTIONS_SUFFIX)
}
