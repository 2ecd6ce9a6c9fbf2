use crate::command::{Category, Command, CommandDescriptor, CommandMetadata, Execution};
use crate::context::CommandContext;
use crate::error::LoadError;

pub struct ProjectsCommand;

struct Project {
    title: &'static str,
    summary: &'static str,
    repo: &'static str,
    technologies: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "StreamPoseML",
        summary: "An open-source toolkit for creating real-time pose classification applications. Built for researchers studying Parkinson's Disease patients in dance therapy settings with McCamish Foundation support. Provides complete workflow from video processing to model deployment, featuring MediaPipe pose detection, dataset annotation, and browser-based real-time classification.",
        repo: "github.com/mrilikecoding/StreamPoseML",
        technologies: "Python, MediaPipe, React, Flask, MLflow, Docker",
    },
    Project {
        title: "Eddi",
        summary: "An experimental platform for creating interactive, movement-responsive environmental systems. Designed to give performers direct agency over their performance environment through computer vision and movement analysis. Explores the intersection of physical theater, computer vision, and environmental design.",
        repo: "github.com/mrilikecoding/eddi",
        technologies: "Computer Vision, Motion Analysis, StreamPoseML, Real-time Systems",
    },
    Project {
        title: "Terminal Portfolio Site",
        summary: "This interactive terminal-style portfolio website you're currently using! Features command history, tab completion, a vim-style NORMAL mode, and deep links for every section. Built as a modern take on the classic terminal interface.",
        repo: "github.com/mrilikecoding/ng",
        technologies: "Rust, WebAssembly, wasm-bindgen, CSS3",
    },
    Project {
        title: "Nyan Pytest",
        summary: "A delightful pytest plugin that adds a colorful nyan cat animation to test result reporting. Makes test runs more engaging with a rainbow trail that grows with test progress and supports both interactive and non-interactive terminals.",
        repo: "github.com/mrilikecoding/nyan-pytest",
        technologies: "Python, pytest",
    },
];

pub fn metadata() -> CommandMetadata {
    CommandMetadata::new("projects", "Show my portfolio", "projects", Category::Content)
        .with_aliases(&["portfolio", "work"])
}

pub fn load() -> Result<CommandDescriptor, LoadError> {
    Ok(CommandDescriptor::new(metadata(), ProjectsCommand))
}

impl Command for ProjectsCommand {
    fn execute(&self, _args: &[String], _ctx: &CommandContext<'_>) -> Execution {
        let mut output = String::new();
        for (i, p) in PROJECTS.iter().enumerate() {
            output.push_str(&format!(
                "\n{}. {}\n\n{}\n\nLink: <a href=\"https://{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n\nTechnologies: {}\n",
                i + 1,
                p.title,
                p.summary,
                p.repo,
                p.repo,
                p.technologies
            ));
        }
        Execution::ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandRegistry;
    use crate::commands::run_builtin;

    #[test]
    fn numbers_every_project_with_a_link() {
        let text = run_builtin(&CommandRegistry::new(), &ProjectsCommand, &[]).text;
        for (i, p) in PROJECTS.iter().enumerate() {
            assert!(text.contains(&format!("{}. {}", i + 1, p.title)));
            assert!(text.contains(&format!("href=\"https://{}\"", p.repo)));
        }
    }
}
