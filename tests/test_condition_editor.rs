use quant_backtest_client::domain::{Condition, ConditionInput, ConditionType, ExclusionKind};
use quant_backtest_client::editor::{ConditionEditor, FieldVisibility, FormState};

#[test]
fn test_visibility_policy_for_every_type() {
    let mut editor = ConditionEditor::new();
    let id = editor.add_condition();

    let expected = [
        (ConditionType::LimitUp, (false, false, false)),
        (ConditionType::PctChangeGt, (true, false, false)),
        (ConditionType::PctChangeLt, (true, false, false)),
        (ConditionType::VolumeRatio, (false, true, true)),
    ];
    for (ty, (value, date2, ratio)) in expected {
        assert!(editor.set_condition_type(id, ty));
        let visibility = editor.row(id).unwrap().visibility();
        assert_eq!(visibility, FieldVisibility { value, date2, ratio }, "{:?}", ty);
        assert!(visibility.is_visible(ConditionInput::Date1));

        // 重复调用结果不变
        editor.update_condition_inputs(id);
        assert_eq!(editor.row(id).unwrap().visibility(), visibility);
    }
}

#[test]
fn test_prefilled_rows_follow_visibility_policy() {
    let mut editor = ConditionEditor::new();
    for ty in ConditionType::ALL {
        let id = editor.add_condition_with_values(ty, -1, -2, 3.0, 4.0);
        assert_eq!(editor.row(id).unwrap().visibility(), FieldVisibility::for_type(ty));
    }
}

#[test]
fn test_new_row_defaults() {
    let mut editor = ConditionEditor::new();
    let id = editor.add_condition();
    let row = editor.row(id).unwrap();
    assert_eq!(row.condition_type, ConditionType::LimitUp);
    assert_eq!(row.date1, "0");
    assert_eq!(row.value, "0");
    assert_eq!(row.date2, "0");
    assert_eq!(row.ratio, "1");
    assert_eq!(row.visibility(), FieldVisibility::default());
}

#[test]
fn test_remove_preserves_relative_order() {
    let mut editor = ConditionEditor::new();
    let ids: Vec<_> = (0..5)
        .map(|i| {
            let id = editor.add_condition();
            editor.set_condition_field(id, ConditionInput::Date1, &(-i).to_string());
            id
        })
        .collect();

    assert!(editor.remove_condition(ids[2]));
    assert_eq!(editor.len(), 4);
    let remaining: Vec<i64> = editor.conditions().iter().map(Condition::date1).collect();
    assert_eq!(remaining, vec![0, -1, -3, -4]);
    assert_eq!(editor.ids(), vec![ids[0], ids[1], ids[3], ids[4]]);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut editor = ConditionEditor::new();
    let a = editor.add_condition();
    let b = editor.add_condition();
    assert!(editor.remove_condition(a));
    assert!(!editor.remove_condition(a));
    assert_eq!(editor.ids(), vec![b]);
}

#[test]
fn test_load_example_from_any_state() {
    let mut form = FormState::new();
    for _ in 0..3 {
        form.editor_mut().add_condition();
    }
    form.set_time_range("120");
    form.set_exclusion(ExclusionKind::Cyb, false);

    form.load_example();

    assert_eq!(form.editor().len(), 6);
    assert_eq!(form.editor().ids()[0].to_string(), "condition_0");
    for kind in ExclusionKind::ALL {
        assert!(form.exclude().get(kind), "{:?}", kind);
    }
    assert_eq!(form.time_range(), 30);
    assert_eq!(
        form.editor().conditions(),
        vec![
            Condition::LimitUp { date1: -3 },
            Condition::PctChangeGt { date1: -2, value: 0.0 },
            Condition::PctChangeLt { date1: -1, value: 0.0 },
            Condition::VolumeRatio { date1: -2, date2: -1, ratio: 1.0 },
            Condition::VolumeRatio { date1: 0, date2: -1, ratio: 1.0 },
            Condition::PctChangeGt { date1: 0, value: 0.0 },
        ]
    );
}

#[test]
fn test_example_request_wire_format() {
    let mut form = FormState::new();
    form.load_example();
    form.set_strategy_name(Some("示例"));
    let request = form.to_request(chrono::Utc::now());
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["timeRange"], 30);
    assert_eq!(value["exclude"]["kcb"], true);
    let conditions = value["conditions"].as_array().unwrap();
    assert_eq!(conditions.len(), 6);
    assert_eq!(conditions[0], serde_json::json!({"type": "limit_up", "date1": -3}));
    assert!(conditions[1].get("ratio").is_none());
    assert!(conditions[3].get("value").is_none());
}

#[test]
fn test_reset_conditions_leaves_single_default_row() {
    let mut form = FormState::new();
    form.load_example();
    form.reset_conditions();
    assert_eq!(form.editor().len(), 1);
    assert_eq!(form.editor().conditions(), vec![Condition::LimitUp { date1: 0 }]);
    assert_eq!(form.editor().ids()[0].to_string(), "condition_0");
}
