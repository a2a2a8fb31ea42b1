use crate::types::SearchKind;

pub fn search(kind: SearchKind, query: &str) {
    let mut client = super::connect();
    super::fetch(&format!("Searching {kind}s for \"{query}\"..."), || {
        client.search(query, kind)
    });
}
