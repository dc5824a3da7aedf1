use super::*;

#[test]
fn ramp_hits_every_stop_exactly() {
    let ramp = HueRamp::traffic_light();
    assert_eq!(ramp.sample(0.0), Rgb8::from_hex(0xFF8787));
    assert_eq!(ramp.sample(0.5), Rgb8::from_hex(0xFFC27B));
    assert_eq!(ramp.sample(0.75), Rgb8::from_hex(0xFFEF7D));
    assert_eq!(ramp.sample(1.0), Rgb8::from_hex(0x8FEA91));
}

#[test]
fn ramp_segments_are_piecewise_linear() {
    let ramp = HueRamp::traffic_light();
    // Halfway through the first segment: k = 0.5 between red and orange.
    assert_eq!(ramp.sample(0.25), Rgb8::new(255, 164, 129));
    // Halfway through the last segment: k = 0.5 between yellow and green.
    assert_eq!(ramp.sample(0.875), Rgb8::new(199, 236, 135));
}

#[test]
fn ramp_clamps_out_of_range_progress() {
    let ramp = HueRamp::traffic_light();
    assert_eq!(ramp.sample(-3.0), ramp.sample(0.0));
    assert_eq!(ramp.sample(9.0), ramp.sample(1.0));
}

#[test]
fn ramp_validation() {
    assert!(HueRamp::traffic_light().validate().is_ok());
    assert!(HueRamp::new(vec![]).is_err());
    let c = Rgb8::new(0, 0, 0);
    assert!(
        HueRamp::new(vec![
            HueStop { at: 0.0, color: c },
            HueStop { at: 0.6, color: c },
            HueStop { at: 0.6, color: c },
            HueStop { at: 1.0, color: c },
        ])
        .is_err()
    );
    assert!(
        HueRamp::new(vec![
            HueStop { at: 0.1, color: c },
            HueStop { at: 1.0, color: c },
        ])
        .is_err()
    );
}

#[test]
fn ramp_validation_rejects_nan_stops() {
    let c = Rgb8::new(0, 0, 0);
    assert!(
        HueRamp::new(vec![
            HueStop { at: 0.0, color: c },
            HueStop {
                at: f64::NAN,
                color: c,
            },
            HueStop { at: 1.0, color: c },
        ])
        .is_err()
    );
}

#[test]
fn palette_json_uses_hex_colors() {
    let json = serde_json::to_value(Palette::default()).unwrap();
    assert_eq!(json["accent"], "#FFC27B");
    assert_eq!(json["hue_ramp"][3]["color"], "#8FEA91");
    let back: Palette = serde_json::from_value(json).unwrap();
    assert_eq!(back, Palette::default());
}
