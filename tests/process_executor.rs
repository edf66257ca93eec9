// tests/process_executor.rs

//! The production executor against real child processes: hand-off,
//! post-exit temp-dir removal and spawn failures.

use std::sync::Arc;

use joblaunch::exec::{JobExecutor, ProcessJobExecutor};
use joblaunch::fs::RealFileSystem;
use joblaunch::launch::AssembledCommand;
use joblaunch_test_utils::{init_tracing, with_timeout};

#[tokio::test]
async fn temp_dir_is_removed_after_the_child_exits() {
    init_tracing();

    let dir = tempfile::tempdir().expect("create temp dir");
    let own_tmp = dir.path().join("job_tmp_s1");
    std::fs::create_dir_all(&own_tmp).unwrap();
    std::fs::write(own_tmp.join("data.bin"), b"x").unwrap();

    let executor = ProcessJobExecutor::new(Arc::new(RealFileSystem));
    let cmd = AssembledCommand {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), "sleep 0.2".to_string()],
        env: Vec::new(),
        temp_dir: Some(own_tmp.clone()),
    };

    let job = with_timeout(executor.launch(cmd))
        .await
        .expect("launch child process");
    assert!(job.pid.is_some());

    // launch resolves at hand-off, before the child exits; the temp dir
    // only goes away once the tracked watcher task has run to completion.
    with_timeout(executor.wait_for_children()).await;
    assert!(!own_tmp.exists());
}

#[tokio::test]
async fn wait_for_children_without_launches_returns_immediately() {
    let executor = ProcessJobExecutor::new(Arc::new(RealFileSystem));
    with_timeout(executor.wait_for_children()).await;
}

#[tokio::test]
async fn spawn_failure_is_an_executor_error() {
    let executor = ProcessJobExecutor::new(Arc::new(RealFileSystem));
    let cmd = AssembledCommand {
        program: "joblaunch-no-such-interpreter".to_string(),
        ..Default::default()
    };

    let err = with_timeout(executor.launch(cmd)).await.unwrap_err();
    assert!(err.to_string().contains("joblaunch-no-such-interpreter"));
}
