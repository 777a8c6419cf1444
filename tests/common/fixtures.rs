//! Test fixtures - reusable kit content.

pub const SKILL_MD: &str = r#"---
name: rpi-workflow
description: Research, plan, implement
---
# RPI Workflow
"#;

pub const SCRIPT_SH: &str = "#!/bin/sh\necho new\n";

pub const PROMPT_MD: &str = "---\nmode: agent\n---\nPlan the change.\n";

pub const INSTRUCTIONS_MD: &str = "---\napplyTo: '**'\n---\nFollow RPI.\n";

pub const AGENTS_MD: &str = "# Agents\n\nUse the RPI workflow.\n";

pub const WORKSPACE_SETTINGS: &str = "{\n  \"chat.promptFiles\": true\n}\n";

pub const COPILOT_TEMPLATE: &str = r#"---
target: .github/copilot-instructions.md
---
Template notes that are not installed.

<!-- RPI:START -->
## RPI
Follow the research, plan, implement loop.
<!-- RPI:END -->

Trailing notes.
"#;

/// Body the template above installs
pub const COPILOT_SECTION: &str = "## RPI\nFollow the research, plan, implement loop.\n";
