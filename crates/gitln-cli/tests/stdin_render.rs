use gitln_testing::assertions::{assert_same_text, strip_ansi};
use gitln_testing::fixtures::sample_log;
use gitln_testing::{LogLine, TestWorld};

const SAMPLE_PLAIN: &str = "\
*   9f3e2a1 {HEAD -> main, *main, *HEAD} Merge branch 'parser' (2m)
|\\
| * 5c4d3b2 {*parser, parser} Fix bug in parser (3h)
* | 7a6b5c4 {tag: v0.2.0} Bump version (2d)
|/
* 1e2f3a4 Initial commit (5M)
";

#[test]
fn test_plain_render_from_stdin() {
    let world = TestWorld::new();
    let result = world
        .run_stdin(&["--stdin", "--color", "never"], &sample_log())
        .expect("Failed to run git-ln");

    assert!(result.success(), "git-ln failed: {}", result.stderr());
    assert_eq!(result.stdout(), SAMPLE_PLAIN);
}

#[test]
fn test_auto_color_is_plain_when_piped() {
    let world = TestWorld::new();
    let result = world.run_stdin(&["--stdin"], &sample_log()).unwrap();

    assert!(result.success(), "git-ln failed: {}", result.stderr());
    assert!(!result.stdout.contains(&0x1b), "piped output should carry no escapes");
}

#[test]
fn test_forced_color_differs_only_by_escapes() {
    let world = TestWorld::new();
    let result = world
        .run_stdin(&["--stdin", "--color", "always"], &sample_log())
        .unwrap();

    assert!(result.success(), "git-ln failed: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains("\x1b[33m9f3e2a1"));
    assert_same_text(&stdout, SAMPLE_PLAIN).unwrap();
}

#[test]
fn test_remote_ref_and_date_scenario() {
    let world = TestWorld::new();
    let line = LogLine::new("a1b2c3d")
        .date("3 weeks ago")
        .subject("Fix bug in parser")
        .refs("origin/main")
        .build();

    let result = world.run_stdin(&["--stdin", "--color", "never"], &line).unwrap();
    assert_eq!(result.stdout(), "* a1b2c3d {*main} Fix bug in parser (3w)\n");
}

#[test]
fn test_graph_only_and_malformed_lines_pass_through() {
    let world = TestWorld::new();
    let input = b"| |\\  \n* \x02a1b2c3d\x02truncated\n|/\r\n";
    let result = world.run_stdin(&["--stdin", "--color", "always"], input).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout, input.to_vec());
}

#[test]
fn test_config_changes_remote_and_marker() {
    let world = TestWorld::new().with_config("remote = \"upstream\"\nmarker = \"^\"\narrows = true\n");
    let line = LogLine::new("abc1234")
        .refs("HEAD -> main, upstream/main, origin/main")
        .build();

    let result = world.run_stdin(&["--stdin", "--color", "never"], &line).unwrap();
    assert!(result.success(), "git-ln failed: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "* abc1234 {HEAD → main, ^main, origin/main} Update (1h)\n"
    );
}

#[test]
fn test_config_separator() {
    let world = TestWorld::new().with_config("separator = \";-;_\"\n");
    let sep = gitln_types::Separator::new(";-;_").unwrap();
    let line = LogLine::new("abc1234").separator(sep).date("2 days ago").build();

    let result = world.run_stdin(&["--stdin", "--color", "never"], &line).unwrap();
    assert_eq!(result.stdout(), "* abc1234 Update (2d)\n");
}

#[test]
fn test_invalid_config_fails() {
    let world = TestWorld::new().with_config("separator = \"\"\n");
    let result = world.run_stdin(&["--stdin"], b"").unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Error:"), "stderr: {}", result.stderr());
}

#[test]
fn test_bound_limits_lines() {
    let world = TestWorld::new().with_config("bound_ratio = 0.5\n");
    let input = b"|\n".repeat(40);

    let result = world
        .run_stdin(&["--stdin", "--color", "never", "--bound"], &input)
        .unwrap();
    assert!(result.success(), "git-ln failed: {}", result.stderr());
    // No terminal attached: 24 rows assumed.
    assert_eq!(result.stdout().lines().count(), 12);
}

#[test]
fn test_timestamp_dates() {
    let world = TestWorld::new();
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let three_days_ago = (now - 3 * 86400 - 60).to_string();
    let line = LogLine::new("abc1234").date(&three_days_ago).build();

    let result = world.run_stdin(&["--stdin", "--color", "never"], &line).unwrap();
    assert_eq!(strip_ansi(&result.stdout()), "* abc1234 Update (3d)\n");
}
