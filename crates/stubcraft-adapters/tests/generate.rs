//! End-to-end generation against a real directory.

use std::fs;
use std::path::Path;

use stubcraft_adapters::{BuiltinStubs, InMemoryStubStore, LocalFilesystem, OverrideStubStore};
use stubcraft_core::{
    application::{ApplicationError, ArtifactOutcome, GenerateService},
    domain::{DomainError, GenerationRequest, Layout, StubKind, marker_count},
    error::StubcraftError,
};
use tempfile::TempDir;

const USER_BINDING: &str = "$this->app->bind(\\App\\Repositories\\Interfaces\\UserRepositoryInterface::class, \\App\\Repositories\\UserRepository::class);";

fn service(root: &Path, layout: Layout) -> GenerateService {
    GenerateService::new(
        Box::new(BuiltinStubs),
        Box::new(LocalFilesystem::new()),
        layout,
        root,
    )
}

fn mark_layout() -> Layout {
    Layout {
        marker: "// MARK".into(),
        ..Layout::default()
    }
}

fn seed_host(root: &Path, content: &str) -> std::path::PathBuf {
    let host = root.join("app/Providers/RepositoryServiceProvider.php");
    fs::create_dir_all(host.parent().unwrap()).unwrap();
    fs::write(&host, content).unwrap();
    host
}

fn request(name: &str, force: bool) -> GenerationRequest {
    GenerationRequest::new(name, force).unwrap()
}

#[test]
fn first_run_writes_files_and_splices_binding() {
    let dir = TempDir::new().unwrap();
    let host = seed_host(dir.path(), "    // MARK\n");

    let report = service(dir.path(), mark_layout())
        .generate(&request("UserRepository", false))
        .unwrap();

    assert!(!report.has_conflicts());
    assert!(!report.bootstrap_created);

    let implementation =
        fs::read_to_string(dir.path().join("app/Repositories/UserRepository.php")).unwrap();
    assert!(implementation.contains("namespace App\\Repositories;"));
    assert!(implementation.contains("use App\\Repositories\\Interfaces\\UserRepositoryInterface;"));
    assert!(implementation.contains("class UserRepository implements UserRepositoryInterface"));

    let contract = fs::read_to_string(
        dir.path()
            .join("app/Repositories/Interfaces/UserRepositoryInterface.php"),
    )
    .unwrap();
    assert!(contract.contains("namespace App\\Repositories\\Interfaces;"));
    assert!(contract.contains("interface UserRepositoryInterface"));

    assert_eq!(
        fs::read_to_string(&host).unwrap(),
        format!("    {USER_BINDING}\n    // MARK\n")
    );
}

#[test]
fn repeat_run_keeps_files_and_splices_again() {
    let dir = TempDir::new().unwrap();
    let host = seed_host(dir.path(), "    // MARK\n");
    let svc = service(dir.path(), mark_layout());

    svc.generate(&request("UserRepository", false)).unwrap();

    let implementation = dir.path().join("app/Repositories/UserRepository.php");
    fs::write(&implementation, "hand edited").unwrap();

    let report = svc.generate(&request("UserRepository", false)).unwrap();

    assert!(report.has_conflicts());
    assert_eq!(report.conflicts().count(), 2);
    assert_eq!(fs::read_to_string(&implementation).unwrap(), "hand edited");

    let text = fs::read_to_string(&host).unwrap();
    assert_eq!(text.matches(USER_BINDING).count(), 2);
    assert_eq!(marker_count(&text, "// MARK"), 1);
    assert!(text.ends_with("// MARK\n"));
}

#[test]
fn n_splices_leave_n_statements_in_order_and_one_marker() {
    let dir = TempDir::new().unwrap();
    let host = seed_host(dir.path(), "register() {\n        // MARK\n}\n");
    let svc = service(dir.path(), mark_layout());

    let names = ["UserRepository", "PostRepository", "Billing/InvoiceRepository"];
    for name in names {
        svc.generate(&request(name, false)).unwrap();
    }

    let text = fs::read_to_string(&host).unwrap();
    assert_eq!(marker_count(&text, "// MARK"), 1);
    assert_eq!(text.matches("$this->app->bind(").count(), names.len());

    let user = text.find("\\UserRepository::class").unwrap();
    let post = text.find("\\PostRepository::class").unwrap();
    let invoice = text.find("\\Billing\\InvoiceRepository::class").unwrap();
    assert!(user < post && post < invoice);
    assert!(text.ends_with("        // MARK\n}\n"));
}

#[test]
fn duplicate_marker_leaves_host_untouched() {
    let dir = TempDir::new().unwrap();
    let original = "// MARK\n// MARK\n";
    let host = seed_host(dir.path(), original);

    let err = service(dir.path(), mark_layout())
        .generate(&request("UserRepository", false))
        .unwrap_err();

    assert!(matches!(
        err,
        StubcraftError::Application(ApplicationError::MarkerNotFound { occurrences: 2, .. })
    ));
    assert_eq!(fs::read_to_string(&host).unwrap(), original);
    // Earlier steps are not rolled back.
    assert!(dir.path().join("app/Repositories/UserRepository.php").is_file());
}

#[test]
fn missing_marker_leaves_host_untouched() {
    let dir = TempDir::new().unwrap();
    let original = "<?php // edited by hand\n";
    let host = seed_host(dir.path(), original);

    let err = service(dir.path(), mark_layout())
        .generate(&request("UserRepository", false))
        .unwrap_err();

    assert!(matches!(
        err,
        StubcraftError::Application(ApplicationError::MarkerNotFound { occurrences: 0, .. })
    ));
    assert_eq!(fs::read_to_string(&host).unwrap(), original);
}

#[test]
fn marker_inside_binding_is_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let original = "    ::class\n";
    let host = seed_host(dir.path(), original);
    let layout = Layout {
        marker: "::class".into(),
        ..Layout::default()
    };

    let err = service(dir.path(), layout)
        .generate(&request("UserRepository", false))
        .unwrap_err();

    assert!(matches!(
        err,
        StubcraftError::Domain(DomainError::MarkerInStatement { .. })
    ));
    assert_eq!(fs::read_to_string(&host).unwrap(), original);
    assert_eq!(marker_count(original, "::class"), 1);
}

#[test]
fn forced_runs_render_identical_files() {
    let dir = TempDir::new().unwrap();
    seed_host(dir.path(), "// MARK\n");
    let svc = service(dir.path(), mark_layout());
    let contract = dir
        .path()
        .join("app/Repositories/Interfaces/Admin/UserRepositoryInterface.php");

    svc.generate(&request("Admin/UserRepository", true)).unwrap();
    let first = fs::read(&contract).unwrap();

    fs::write(&contract, "stale").unwrap();
    let report = svc.generate(&request("Admin/UserRepository", true)).unwrap();

    assert_eq!(fs::read(&contract).unwrap(), first);
    assert!(matches!(
        report.artifacts[1],
        ArtifactOutcome::Overwritten { .. }
    ));
}

#[test]
fn missing_host_file_is_bootstrapped() {
    let dir = TempDir::new().unwrap();

    let report = service(dir.path(), Layout::default())
        .generate(&request("app/Repositories/UserRepository", false))
        .unwrap();

    assert!(report.bootstrap_created);
    let host = dir
        .path()
        .join("app/Providers/RepositoryServiceProvider.php");
    let text = fs::read_to_string(host).unwrap();
    assert!(text.contains("namespace App\\Providers;"));
    assert!(text.contains("class RepositoryServiceProvider extends ServiceProvider"));
    assert!(text.contains(&format!("        {USER_BINDING}\n        //:end-bindings:\n")));
    assert_eq!(marker_count(&text, "//:end-bindings:"), 1);
}

#[test]
fn stub_overrides_are_used() {
    let dir = TempDir::new().unwrap();
    let stubs = TempDir::new().unwrap();
    fs::write(
        stubs.path().join("contract.stub"),
        "<?php namespace {{CONTRACT_NAMESPACE}}; interface {{CONTRACT}} {}\n",
    )
    .unwrap();
    seed_host(dir.path(), "// MARK\n");

    let svc = GenerateService::new(
        Box::new(OverrideStubStore::new(stubs.path(), Box::new(BuiltinStubs))),
        Box::new(LocalFilesystem::new()),
        mark_layout(),
        dir.path(),
    );
    svc.generate(&request("UserRepository", false)).unwrap();

    assert_eq!(
        fs::read_to_string(
            dir.path()
                .join("app/Repositories/Interfaces/UserRepositoryInterface.php")
        )
        .unwrap(),
        "<?php namespace App\\Repositories\\Interfaces; interface UserRepositoryInterface {}\n"
    );
}

#[test]
fn missing_stub_aborts_before_writing() {
    let dir = TempDir::new().unwrap();
    seed_host(dir.path(), "// MARK\n");
    let store = InMemoryStubStore::with_builtin().unwrap();
    store.remove(StubKind::Implementation).unwrap();

    let svc = GenerateService::new(
        Box::new(store),
        Box::new(LocalFilesystem::new()),
        mark_layout(),
        dir.path(),
    );
    let err = svc.generate(&request("UserRepository", false)).unwrap_err();

    assert_eq!(err.category(), stubcraft_core::error::ErrorCategory::Internal);
    assert!(!dir.path().join("app/Repositories").exists());
}
