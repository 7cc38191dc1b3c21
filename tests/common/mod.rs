use git2::{Repository, Signature};
use tempfile::TempDir;

/// Create a repository with one commit and the given lightweight tags on it
pub fn repo_with_tags(tags: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();
    let object = repo.find_object(oid, None).unwrap();

    for tag in tags {
        repo.tag_lightweight(tag, &object, false).unwrap();
    }
    dir
}
