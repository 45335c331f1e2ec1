//! End-to-end workflow tests driven by a scripted prompter.

use lazy_typer::config::{CustomCommand, PackageManager, ProfileKey};
use lazy_typer::runner::LaunchPlan;
use lazy_typer::workflow::{Answer, ClearMode, Outcome, ScriptedPrompter, State, Workflow};

use crate::integration::fixtures::{standard_scripts, Sandbox};

fn text(s: &str) -> Answer {
    Answer::Text(s.to_string())
}

fn pick(label: &str) -> Answer {
    Answer::Label(label.to_string())
}

fn workflow(sandbox: &Sandbox, answers: Vec<Answer>) -> Workflow<ScriptedPrompter> {
    Workflow::new(
        sandbox.store(),
        ScriptedPrompter::new(answers),
        sandbox.workspace(),
    )
}

#[test]
fn test_first_run_setup_then_launch() {
    let sandbox = Sandbox::new();
    sandbox.add_project("apps/web", &standard_scripts());
    sandbox.add_project("apps/api", &[("start", "node server.js")]);

    let mut wf = workflow(
        &sandbox,
        vec![text("apps"), pick("yarn"), pick("web"), pick("test")],
    );

    assert_eq!(
        wf.run().unwrap(),
        Outcome::Launch(LaunchPlan::Script {
            package_manager: "yarn".to_string(),
            script: "test".to_string(),
            directory: sandbox.workspace().join("apps/web"),
        })
    );
    assert_eq!(wf.prompter().menus[1], vec!["exit", "api", "web"]);
    assert_eq!(
        wf.prompter().menus[2],
        vec!["go back", "dev", "build", "test", "lint"]
    );
    assert_eq!(wf.prompter().remaining(), 0);
}

#[test]
fn test_scriptless_project_returns_to_selection_then_launches() {
    let sandbox = Sandbox::new();
    sandbox.add_project("a", &[("build", "tsc")]);
    sandbox.add_manifest("b", r#"{"name":"b"}"#);

    let mut wf = workflow(
        &sandbox,
        vec![text("."), pick("npm"), pick("b"), pick("a"), pick("build")],
    );

    let mut state = wf.step(State::ResolveConfig).unwrap();
    assert_eq!(state, State::SelectProject);
    assert_eq!(wf.manifests().len(), 2);

    state = wf.step(state).unwrap();
    assert_eq!(
        state,
        State::SelectScript {
            manifest: sandbox.workspace().join("b/package.json")
        }
    );

    state = wf.step(state).unwrap();
    assert_eq!(state, State::SelectProject);

    state = wf.step(state).unwrap();
    state = wf.step(state).unwrap();
    assert_eq!(
        state,
        State::Done(Outcome::Launch(LaunchPlan::Script {
            package_manager: "npm".to_string(),
            script: "build".to_string(),
            directory: sandbox.workspace().join("a"),
        }))
    );
    assert_eq!(
        State::Done(Outcome::Exit),
        wf.step(State::Done(Outcome::Exit)).unwrap()
    );
}

#[test]
fn test_second_run_reuses_saved_profile() {
    let sandbox = Sandbox::new();
    sandbox.add_project("web", &standard_scripts());

    let mut first = workflow(&sandbox, vec![text("."), pick("npm"), pick("exit")]);
    assert_eq!(first.run().unwrap(), Outcome::Exit);

    let mut second = workflow(&sandbox, vec![pick("web"), pick("dev")]);
    let outcome = second.run().unwrap();

    assert_eq!(
        outcome,
        Outcome::Launch(LaunchPlan::Script {
            package_manager: "npm".to_string(),
            script: "dev".to_string(),
            directory: sandbox.workspace().join("web"),
        })
    );
    // No setup prompts: the first menu is project selection.
    assert_eq!(second.prompter().menus[0], vec!["exit", "web"]);
}

#[test]
fn test_custom_command_after_going_back() {
    let sandbox = Sandbox::new();
    sandbox.add_project("libs/auth", &[("lint", "eslint .")]);
    sandbox.add_project("libs/core", &[("build", "tsc"), ("lint", "eslint .")]);

    let mut wf = workflow(
        &sandbox,
        vec![
            text("libs"),
            pick("custom"),
            text("nx"),
            text("run {project}:{script} --project={project}"),
            pick("auth"),
            pick("go back"),
            pick("core"),
            pick("build"),
        ],
    );

    assert_eq!(
        wf.run().unwrap(),
        Outcome::Launch(LaunchPlan::Custom {
            command_line: "nx run core:build --project=core".to_string(),
            directory: sandbox.workspace(),
        })
    );
    assert!(wf
        .prompter()
        .messages
        .contains(&"Going back to project selection...".to_string()));

    let saved = sandbox
        .store()
        .load(&ProfileKey::Directory(sandbox.workspace()))
        .unwrap()
        .unwrap();
    assert_eq!(
        saved.package_manager,
        PackageManager::Custom(CustomCommand::new(
            "nx",
            "run {project}:{script} --project={project}"
        ))
    );
}

#[test]
fn test_project_without_scripts_then_exit() {
    let sandbox = Sandbox::new();
    sandbox.add_manifest("bare", r#"{"name":"bare"}"#);

    let mut wf = workflow(&sandbox, vec![text("."), pick("pnpm"), pick("bare"), pick("exit")]);

    assert_eq!(wf.run().unwrap(), Outcome::Exit);
    assert_eq!(
        wf.prompter().messages,
        vec![
            "Please specify which folders to scan (comma separated. To use current folder input a dot '.' ):",
            "No scripts found in this package.",
            "Exiting, no project selected.",
        ]
    );
}

#[test]
fn test_missing_folder_aborts_setup() {
    let sandbox = Sandbox::new();
    let mut wf = workflow(&sandbox, vec![text("apps, libs")]);

    let err = wf.run().unwrap_err();

    assert!(err
        .to_string()
        .starts_with("The following folders do not exist:"));
    assert!(!sandbox.store_path().exists());
}

#[test]
fn test_empty_folder_reports_no_manifests() {
    let sandbox = Sandbox::new();
    let mut wf = workflow(&sandbox, vec![text("."), pick("npm")]);

    assert_eq!(wf.run().unwrap(), Outcome::NoManifests);
    // Configuration is kept even though nothing was found.
    assert!(sandbox.store_path().exists());
}

#[test]
fn test_invalid_manifest_error_propagates() {
    let sandbox = Sandbox::new();
    sandbox.add_manifest("broken", "{ nope");

    let mut wf = workflow(&sandbox, vec![text("."), pick("npm"), pick("broken")]);

    let err = wf.run().unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[test]
fn test_clear_all_then_setup_with_stepping() {
    let sandbox = Sandbox::new();
    sandbox.add_project("web", &standard_scripts());
    let mut seed = workflow(&sandbox, vec![text("."), pick("yarn"), pick("exit")]);
    seed.run().unwrap();

    let mut wf = workflow(&sandbox, vec![text("."), pick("pnpm")]).with_clear(ClearMode::All);

    assert_eq!(wf.step(State::ResolveConfig).unwrap(), State::SelectProject);
    assert_eq!(wf.prompter().messages[0], "Configuration has been cleared.");
    assert_eq!(
        wf.config().unwrap().package_manager,
        PackageManager::Pnpm
    );
}
