//! Integration tests for `rpi-kit project`

mod common;

use common::*;

#[test]
fn installs_core_workspace() {
    let env = TestEnv::with_kit();

    let result = env.run(&["project"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let agents = std::fs::read_to_string(env.work_path(".rpi/AGENTS.md")).unwrap();
    assert_eq!(agents, AGENTS_MD);
    let gitkeep = std::fs::read(env.work_path(".rpi/projects/.gitkeep")).unwrap();
    assert!(gitkeep.is_empty());
    assert_not_installed!(env.work.path(), ".github");
    assert_not_installed!(env.work.path(), ".vscode");

    assert_output_contains!(result, "RPI Kit — Project installation");
    assert_output_contains!(result, "Copilot  : no");
    assert_output_contains!(result, "── Core ");
    assert_output_contains!(result, "created  .rpi/AGENTS.md");
    assert_output_contains!(result, "Next steps:");
    assert!(!result.stdout.contains("Copilot Chat"));
}

#[test]
fn copilot_renders_template_section() {
    let env = TestEnv::with_kit();

    let result = env.run(&["project", "--copilot"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let instructions =
        std::fs::read_to_string(env.work_path(".github/copilot-instructions.md")).unwrap();
    assert_eq!(instructions, COPILOT_SECTION);
    let settings = std::fs::read_to_string(env.work_path(".vscode/settings.json")).unwrap();
    assert_eq!(settings, WORKSPACE_SETTINGS);
    assert_output_contains!(result, "created  .github/copilot-instructions.md");
    assert_output_contains!(result, "Copilot Chat");
}

#[test]
fn target_flag_selects_repository() {
    let env = TestEnv::with_kit();
    std::fs::create_dir_all(env.work_path("repo")).unwrap();

    let result = env.run(&["project", "--target", "repo"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_installed!(env.work.path(), "repo/.rpi/AGENTS.md");
    assert_not_installed!(env.work.path(), ".rpi");
}

#[test]
fn missing_target_directory_is_rejected() {
    let env = TestEnv::with_kit();

    let result = env.run(&["project", "--target", "nope"]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "Error: Target directory does not exist:");
    assert!(list_all_files(env.work.path()).is_empty());
}

#[test]
fn workspace_settings_are_never_overwritten() {
    let env = TestEnv::with_kit();
    env.write_work_file(".vscode/settings.json", "{ \"mine\": 1 }\n");
    env.write_work_file(".rpi/projects/.gitkeep", "keep");

    let result = env.run(&["project", "--copilot", "--mode", "overwrite"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let settings = std::fs::read_to_string(env.work_path(".vscode/settings.json")).unwrap();
    assert_eq!(settings, "{ \"mine\": 1 }\n");
    let gitkeep = std::fs::read_to_string(env.work_path(".rpi/projects/.gitkeep")).unwrap();
    assert_eq!(gitkeep, "keep");
    assert_output_contains!(result, "skipped  .vscode/settings.json");
}

#[test]
fn existing_instructions_follow_mode() {
    let env = TestEnv::with_kit();
    env.write_work_file(".github/copilot-instructions.md", "old\n");

    let skipped = env.run(&["project", "--copilot"]);
    assert!(skipped.is_success(), "{}", skipped.combined_output());
    assert_output_contains!(skipped, "skipped  .github/copilot-instructions.md");

    let overwritten = env.run(&["project", "--copilot", "--mode", "overwrite"]);
    assert!(overwritten.is_success(), "{}", overwritten.combined_output());
    let instructions =
        std::fs::read_to_string(env.work_path(".github/copilot-instructions.md")).unwrap();
    assert_eq!(instructions, COPILOT_SECTION);
}

#[test]
fn missing_template_is_a_warning() {
    let env = TestEnv::with_kit();
    std::fs::remove_file(
        env.kit_path("rpi-kit-copilot/templates/copilot-instructions.rpi-template.md"),
    )
    .unwrap();

    let result = env.run(&["project", "--copilot"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result
        .stderr
        .contains("[warn] Copilot instructions template not found"));
    assert_installed!(env.work.path(), ".vscode/settings.json");
    assert_not_installed!(env.work.path(), ".github");
}

#[test]
fn template_without_frontmatter_is_fatal() {
    let env = TestEnv::with_kit();
    env.write_kit_file(
        "rpi-kit-copilot/templates/copilot-instructions.rpi-template.md",
        "no frontmatter here\n",
    );

    let result = env.run(&["project", "--copilot"]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "Error: template missing frontmatter:");
    // Planning fails before any artifact is written
    assert!(list_all_files(env.work.path()).is_empty());
}

#[test]
fn template_escaping_the_repository_is_fatal() {
    let env = TestEnv::with_kit();
    env.write_kit_file(
        "rpi-kit-copilot/templates/copilot-instructions.rpi-template.md",
        "---\ntarget: ../outside.md\n---\n<!-- RPI:START -->\nx\n<!-- RPI:END -->\n",
    );

    let result = env.run(&["project", "--copilot"]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "escapes the deployment root");
    assert!(!env.work.path().parent().unwrap().join("outside.md").exists());
}

#[test]
fn missing_agents_md_aborts() {
    let env = TestEnv::with_kit();
    std::fs::remove_file(env.kit_path("rpi-kit-project/.rpi/AGENTS.md")).unwrap();

    let result = env.run(&["project"]);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "Error: source not found:");
    assert_not_installed!(env.work.path(), ".rpi/projects/.gitkeep");
}

#[test]
fn missing_agents_md_warns_when_configured() {
    let env = TestEnv::with_kit();
    std::fs::remove_file(env.kit_path("rpi-kit-project/.rpi/AGENTS.md")).unwrap();
    env.write_kit_file("rpi-kit.toml", "[install]\nmissing_source = \"warn\"\n");

    let result = env.run(&["project"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stderr.contains("[warn] source not found:"));
    assert_not_installed!(env.work.path(), ".rpi/AGENTS.md");
    assert_installed!(env.work.path(), ".rpi/projects/.gitkeep");
}
