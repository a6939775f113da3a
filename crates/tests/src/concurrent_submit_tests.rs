use pretty_assertions::assert_eq;
use shared_types::{SubmittedUser, UserFormValues};
use tokio::sync::mpsc;

use crate::common::{self, Reply};

fn named(name: &str) -> UserFormValues {
    UserFormValues {
        name: name.to_string(),
        ..common::ana()
    }
}

#[tokio::test]
async fn test_overlapping_submissions_complete_in_arrival_order() {
    let endpoint = common::spawn_endpoint(Reply::Created { first_id: 1 }).await;
    let client = endpoint.client();
    let (tx, mut rx) = mpsc::unbounded_channel::<SubmittedUser>();

    // The first request is held back, so its response arrives second.
    for name in ["delay-300", "fast"] {
        let client = client.clone();
        let tx = tx.clone();
        let values = named(name);
        tokio::spawn(async move {
            let user = client.create_user(&values).await.expect("submission succeeds");
            tx.send(user).expect("receiver alive");
        });
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    drop(tx);

    let mut arrived = Vec::new();
    while let Some(user) = rx.recv().await {
        arrived.push(user.name);
    }

    assert_eq!(arrived, vec!["fast".to_string(), "delay-300".to_string()]);
    assert_eq!(endpoint.requests().len(), 2);
}
