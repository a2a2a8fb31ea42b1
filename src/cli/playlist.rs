pub fn playlist_tracks(playlist_id: &str) {
    let mut client = super::connect();
    super::fetch("Fetching playlist tracks...", || {
        client.get_playlist_tracks(playlist_id)
    });
}
