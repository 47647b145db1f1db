//! Contract tests for the relay seam.

use intake_relay::{Relay, RelayAck, RelayError};
use intake_report::SubmissionDocument;

/// In-memory relay that answers from a script, for exercising the contract
/// without a network.
struct ScriptedRelay {
    outcome: Result<RelayAck, String>,
}

impl Relay for ScriptedRelay {
    async fn deliver(&self, _document: &SubmissionDocument) -> Result<RelayAck, RelayError> {
        match &self.outcome {
            Ok(ack) => Ok(ack.clone()),
            Err(reason) => Err(RelayError::Rejected {
                status: 422,
                reason: reason.clone(),
            }),
        }
    }
}

fn document() -> SubmissionDocument {
    SubmissionDocument {
        category: "soc2".to_string(),
        subject: "New SOC 2 readiness enquiry from jane@example.com".to_string(),
        reply_to: "jane@example.com".to_string(),
        body: "SOC 2 readiness\n".to_string(),
    }
}

#[tokio::test]
async fn acknowledgment_carries_the_relay_message() {
    let relay = ScriptedRelay {
        outcome: Ok(RelayAck {
            message: Some("Thanks, we will be in touch.".to_string()),
        }),
    };
    let ack = relay.deliver(&document()).await.expect("delivery succeeds");
    assert_eq!(ack.message.as_deref(), Some("Thanks, we will be in touch."));
}

#[tokio::test]
async fn rejection_reason_is_surfaced_verbatim() {
    let relay = ScriptedRelay {
        outcome: Err("access key is invalid".to_string()),
    };
    let error = relay
        .deliver(&document())
        .await
        .expect_err("delivery fails");
    assert_eq!(
        error.to_string(),
        "relay rejected the submission (422): access key is invalid"
    );
}
