use generative_ox::{FieldType, GenerativeClient, Model, OutputSchema};

fn setup_client() -> Option<GenerativeClient> {
    GenerativeClient::load_from_env().ok()
}

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY or GOOGLE_AI_API_KEY"]
async fn test_structured_output_round_trip() {
    let client = setup_client().expect("GEMINI_API_KEY or GOOGLE_AI_API_KEY not set");

    let response = client
        .send_with_schema(
            "Give one short tip for keeping a houseplant alive.",
            OutputSchema::new()
                .field("tip", FieldType::String)
                .field("difficulty", FieldType::Integer)
                .required("tip"),
        )
        .await;

    match response {
        Ok(response) => {
            let output: serde_json::Value = response
                .output()
                .expect("response text should be JSON")
                .expect("response should carry text");
            assert!(output.get("tip").is_some(), "tip is required: {output}");
        }
        Err(e) => {
            println!("send failed with error: {e:?}");
            panic!("send should succeed, but got error: {e}");
        }
    }
}

#[tokio::test]
#[ignore = "requires GEMINI_API_KEY or GOOGLE_AI_API_KEY"]
async fn test_unknown_model_is_rejected_by_api() {
    let api_key = std::env::var("GEMINI_API_KEY")
        .or_else(|_| std::env::var("GOOGLE_AI_API_KEY"))
        .expect("GEMINI_API_KEY or GOOGLE_AI_API_KEY not set");
    let client = GenerativeClient::builder()
        .api_key(api_key)
        .model(Model::from("non-existent-model-12345"))
        .build()
        .unwrap();

    let err = client
        .send("hi", [("a", "string")], ["a"])
        .await
        .expect_err("unknown model should fail");

    assert!(err.is_transport());
    assert!(err.status().is_some_and(|s| s >= 400));
}
