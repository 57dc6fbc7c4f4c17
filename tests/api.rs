mod helpers;

use helpers::{
    setup::{spawn_app, spawn_app_with_backup},
    utils::{brands, days_from, voucher_input},
};
use voucher_tracker_sdk::{
    APIErrorVariant, ExpiryStatus, GetNearbyVouchersInput, StatusCode, StoreType, ID,
};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_crud_voucher() {
    let (app, sdk) = spawn_app().await;
    let mut input = voucher_input(
        "Joe's Pizza",
        StoreType::Specific,
        days_from(&app.now, 3),
    );
    input.store_location = Some("Brooklyn".into());
    input.discount_value = Some(20.0);

    let voucher = sdk
        .voucher
        .create(input)
        .await
        .expect("To create voucher")
        .voucher;
    assert_eq!(voucher.brand_name, "Joe's Pizza");
    assert_eq!(voucher.store_type, StoreType::Specific);
    assert_eq!(voucher.status, ExpiryStatus::ExpiringSoon);
    assert_eq!(voucher.days_until_expiry, Some(3));
    assert_eq!(voucher.created_at, app.now);
    let value = voucher.discount_value.clone().expect("Discount value");
    assert_eq!(value.currency_code, app.config.default_currency);

    let res = sdk
        .voucher
        .get(voucher.id)
        .await
        .expect("To get voucher")
        .voucher;
    assert_eq!(res.id, voucher.id);
    assert_eq!(res.store_location, Some("Brooklyn".into()));

    let res = sdk.voucher.get_all().await.expect("To list vouchers");
    assert_eq!(res.vouchers.len(), 1);

    let res = sdk
        .voucher
        .delete(voucher.id)
        .await
        .expect("To delete voucher")
        .voucher;
    assert_eq!(res.id, voucher.id);

    let err = sdk
        .voucher
        .get(voucher.id)
        .await
        .expect_err("Voucher to be deleted");
    assert_eq!(err.status, Some(StatusCode::NOT_FOUND));
    let err = sdk
        .voucher
        .delete(voucher.id)
        .await
        .expect_err("Voucher to be deleted");
    assert_eq!(err.status, Some(StatusCode::NOT_FOUND));
}

#[actix_web::main]
#[test]
async fn test_get_unknown_voucher() {
    let (_, sdk) = spawn_app().await;
    let err = sdk
        .voucher
        .get(ID::default())
        .await
        .expect_err("Voucher to not exist");
    assert_eq!(err.variant, APIErrorVariant::UnexpectedStatusCode);
    assert_eq!(err.status, Some(StatusCode::NOT_FOUND));
}

#[actix_web::main]
#[test]
async fn test_create_voucher_validation() {
    let (app, sdk) = spawn_app().await;

    let mut input = voucher_input("Nike", StoreType::International, days_from(&app.now, 3));
    input.voucher_code = "".into();
    let err = sdk
        .voucher
        .create(input)
        .await
        .expect_err("Empty voucher code to be rejected");
    assert_eq!(err.status, Some(StatusCode::BAD_REQUEST));

    // A malformed expiry date is kept and classified as unparseable
    let input = voucher_input("Nike", StoreType::International, "not-a-date".into());
    let voucher = sdk
        .voucher
        .create(input)
        .await
        .expect("To create voucher")
        .voucher;
    assert_eq!(voucher.status, ExpiryStatus::Unparseable);
    assert!(voucher.days_until_expiry.is_none());
}

#[actix_web::main]
#[test]
async fn test_expiring_vouchers() {
    let (app, sdk) = spawn_app().await;
    let inputs = vec![
        voucher_input("Expired", StoreType::International, days_from(&app.now, -1)),
        voucher_input("Today", StoreType::International, days_from(&app.now, 0)),
        voucher_input("Soon", StoreType::Regional, days_from(&app.now, 5)),
        voucher_input("Later", StoreType::Specific, days_from(&app.now, 20)),
        voucher_input("Broken", StoreType::International, "31/12/2024".into()),
    ];
    for input in inputs {
        sdk.voucher.create(input).await.expect("To create voucher");
    }

    let res = sdk.voucher.get_expiring(None).await.expect("To get vouchers");
    assert_eq!(brands(&res.vouchers), vec!["Today", "Soon"]);

    let res = sdk
        .voucher
        .get_expiring(Some(30))
        .await
        .expect("To get vouchers");
    assert_eq!(brands(&res.vouchers), vec!["Today", "Soon", "Later"]);
    assert!(res
        .vouchers
        .iter()
        .all(|v| v.status == ExpiryStatus::ExpiringSoon));

    let err = sdk
        .voucher
        .get_expiring(Some(-1))
        .await
        .expect_err("Negative window to be rejected");
    assert_eq!(err.status, Some(StatusCode::BAD_REQUEST));
}

#[actix_web::main]
#[test]
async fn test_nearby_vouchers() {
    let (app, sdk) = spawn_app().await;
    let expiry = days_from(&app.now, 30);

    let mut pizza = voucher_input("Joe's Pizza", StoreType::Specific, expiry.clone());
    pizza.store_location = Some("Brooklyn".into());
    let mut target = voucher_input("Target", StoreType::Regional, expiry.clone());
    target.region = Some("Northeast, US".into());
    let inputs = vec![
        voucher_input("Amazon", StoreType::International, expiry.clone()),
        pizza,
        target,
    ];
    for input in inputs {
        sdk.voucher.create(input).await.expect("To create voucher");
    }

    let cases = vec![
        (None, None, vec!["Amazon"]),
        (Some("northeast"), None, vec!["Amazon", "Target"]),
        (None, Some("joe"), vec!["Amazon", "Joe's Pizza"]),
        (None, Some("Giants"), vec!["Amazon"]),
        (Some(""), Some("   "), vec!["Amazon"]),
        (Some("US"), Some("BROOKLYN"), vec!["Amazon", "Joe's Pizza", "Target"]),
    ];
    for (region, store_name, expected) in cases {
        let res = sdk
            .voucher
            .get_nearby(GetNearbyVouchersInput {
                region: region.map(String::from),
                store_name: store_name.map(String::from),
            })
            .await
            .expect("To get nearby vouchers");
        assert_eq!(brands(&res.vouchers), expected);
    }
}

#[actix_web::main]
#[test]
async fn test_voucher_stats() {
    let (app, sdk) = spawn_app().await;
    let stats = sdk.voucher.get_stats().await.expect("To get stats").stats;
    assert_eq!(stats.total, 0);

    let inputs = vec![
        voucher_input("Expired", StoreType::International, days_from(&app.now, -3)),
        voucher_input("Soon", StoreType::International, days_from(&app.now, 7)),
        voucher_input("Active", StoreType::International, days_from(&app.now, 8)),
        voucher_input("Broken", StoreType::International, "not-a-date".into()),
    ];
    for input in inputs {
        sdk.voucher.create(input).await.expect("To create voucher");
    }

    let stats = sdk.voucher.get_stats().await.expect("To get stats").stats;
    assert_eq!(stats.total, 4);
    assert_eq!(stats.expired, 1);
    assert_eq!(stats.expiring_soon, 1);
    assert_eq!(stats.active, 1);
}

#[actix_web::main]
#[test]
async fn test_backup_not_configured() {
    let (_, sdk) = spawn_app().await;
    let err = sdk
        .backup
        .push()
        .await
        .expect_err("Backup to not be configured");
    assert_eq!(err.status, Some(StatusCode::CONFLICT));
}

#[actix_web::main]
#[test]
async fn test_push_backup() {
    let (app, sdk) = spawn_app_with_backup().await;
    let inputs = vec![
        voucher_input("Nike", StoreType::International, days_from(&app.now, 3)),
        voucher_input("Adidas", StoreType::International, days_from(&app.now, 10)),
    ];
    for input in inputs {
        sdk.voucher.create(input).await.expect("To create voucher");
    }

    let res = sdk.backup.push().await.expect("To push backup");
    assert_eq!(res.file_name, "voucher-backup.json");
    assert_eq!(res.voucher_count, 2);
    assert_eq!(res.exported_at, app.now);

    let pushed = app.backup_sink.pushed();
    assert_eq!(pushed.len(), 1);
    assert_eq!(pushed[0].0, "voucher-backup.json");
    assert!(pushed[0].1.contains("Nike"));
    assert!(pushed[0].1.contains("Adidas"));
}
