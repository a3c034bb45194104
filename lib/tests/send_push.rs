
#[cfg(test)]
mod test {
    use crate::commons::{DefaultData, SnsGatewayMock, TestContext, SNS_MESSAGE_ID};
    use serial_test::serial;
    use sns_push_dispatcher::config::SnsPushConfig;
    use sns_push_dispatcher::delivery::DeliveryResponse;
    use sns_push_dispatcher::error::SnsPushDispatcherErrorKind;
    use sns_push_dispatcher::sns_push_service::SnsPushService;
    use test_context::test_context;

    #[test_context(TestContext)]
    #[serial]
    #[tokio::test]
    async fn should_return_one_outcome_per_device(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SnsGatewayMock::publish_success(ctx, "EndpointTokenA").await;
        SnsGatewayMock::publish_success(ctx, "EndpointTokenB").await;
        SnsGatewayMock::publish_success(ctx, "EndpointTokenC").await;

        let notification = DefaultData::default_notification();
        let devices = vec![
            DefaultData::android_device("EndpointTokenA"),
            DefaultData::ios_device("EndpointTokenB"),
            DefaultData::android_device("EndpointTokenC"),
        ];

        let outcomes = ctx.service.send(&notification, &devices).await?;

        assert_eq!(3, outcomes.len());

        for device in &devices {
            let outcome = outcomes.iter().find(|it| it.device.device_token == hex::encode(&device.device_token)).unwrap();
            assert_eq!(device.device_type, outcome.device.device_type);
            assert!(outcome.transmitted);
            assert_eq!(
                DeliveryResponse::Delivered {
                    message_id: Some(SNS_MESSAGE_ID.to_string()),
                },
                outcome.response
            );
        }

        Ok(())
    }

    #[test_context(TestContext)]
    #[serial]
    #[tokio::test]
    async fn should_isolate_failures_between_devices(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SnsGatewayMock::publish_success(ctx, "WorkingEndpoint").await;
        SnsGatewayMock::publish_failure(ctx, "BrokenEndpoint1").await;

        let notification = DefaultData::default_notification();
        let devices = vec![DefaultData::ios_device("WorkingEndpoint"), DefaultData::android_device("BrokenEndpoint1")];

        let outcomes = ctx.service.send(&notification, &devices).await?;

        assert_eq!(2, outcomes.len());

        let working = outcomes.iter().find(|it| it.device.device_token == hex::encode("WorkingEndpoint")).unwrap();
        assert!(working.transmitted);

        let broken = outcomes.iter().find(|it| it.device.device_token == hex::encode("BrokenEndpoint1")).unwrap();
        assert!(!broken.transmitted);
        match &broken.response {
            DeliveryResponse::Failed { error } => assert!(!error.is_empty()),
            DeliveryResponse::Delivered { .. } => panic!("Broken endpoint should not report a delivered response"),
        }

        Ok(())
    }

    #[test_context(TestContext)]
    #[serial]
    #[tokio::test]
    async fn should_complete_when_all_devices_fail(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SnsGatewayMock::publish_failure(ctx, "BrokenEndpoint1").await;
        SnsGatewayMock::publish_failure(ctx, "BrokenEndpoint2").await;

        let notification = DefaultData::default_notification();
        let devices = vec![DefaultData::ios_device("BrokenEndpoint1"), DefaultData::android_device("BrokenEndpoint2")];

        let outcomes = ctx.service.send(&notification, &devices).await?;

        assert_eq!(2, outcomes.len());
        assert!(outcomes.iter().all(|it| !it.transmitted));

        Ok(())
    }

    #[test_context(TestContext)]
    #[serial]
    #[tokio::test]
    async fn should_publish_structured_message_with_routing_attributes(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        SnsGatewayMock::publish_success_for_structured_message(ctx, "StructuredEndpoint").await;

        let notification = DefaultData::default_notification();
        let devices = vec![DefaultData::ios_device("StructuredEndpoint")];

        let outcomes = ctx.service.send(&notification, &devices).await?;

        assert_eq!(1, outcomes.len());
        assert!(outcomes[0].transmitted);

        Ok(())
    }

    #[test_context(TestContext)]
    #[serial]
    #[tokio::test]
    async fn should_return_no_outcomes_without_devices(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let notification = DefaultData::default_notification();

        let outcomes = ctx.service.send(&notification, &[]).await?;

        assert!(outcomes.is_empty());

        Ok(())
    }

    #[test]
    fn should_fail_to_create_service_without_access_key() {
        let config = SnsPushConfig::new("", "secret-key");

        let error = SnsPushService::new(&config).err().unwrap();

        assert_eq!(SnsPushDispatcherErrorKind::Misconfiguration, error.kind);
    }

    #[test]
    fn should_fail_to_create_service_without_secret_key() {
        let config = SnsPushConfig::new("access-key", "");

        let error = SnsPushService::new(&config).err().unwrap();

        assert_eq!(SnsPushDispatcherErrorKind::Misconfiguration, error.kind);
    }
}
