use assert_cmd::Command;

#[test]
fn run_single_push() {
    let output = "Solving levels/01-single-push.txt...\n\
                  Found solution: D\n\
                  Moves: 1\n\
                  Pushes: 1\n";

    Command::cargo_bin("sokoban-engine")
        .unwrap()
        .arg("levels/01-single-push.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_with_history() {
    let output = "Solving levels/01-single-push.txt...\n\
                  Found solution: D\n\
                  Moves: 1\n\
                  Pushes: 1\n\
                  %%%%\n\
                  %p %\n\
                  %c %\n\
                  %b %\n\
                  %%%%\n\
                  \n\
                  %%%%\n\
                  %  %\n\
                  %p %\n\
                  %v %\n\
                  %%%%\n\
                  \n";

    Command::cargo_bin("sokoban-engine")
        .unwrap()
        .arg("--history")
        .arg("levels/01-single-push.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution() {
    let output = "Solving levels/no-solution.txt...\n\
                  No solution found\n";

    Command::cargo_bin("sokoban-engine")
        .unwrap()
        .arg("--max-depth")
        .arg("20")
        .arg("levels/no-solution.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_missing_file() {
    Command::cargo_bin("sokoban-engine")
        .unwrap()
        .arg("levels/does-not-exist.txt")
        .assert()
        .failure()
        .stdout("");
}
