use uvanim_import_core::{
    resolve_texture_property, rewrite_object_bindings, rewrite_object_bindings_default,
    CurveBinding, ImportedObject, RendererKind, TargetComponent, TransformPath,
};

fn path(segments: &[&str]) -> TransformPath {
    TransformPath::new(segments.iter().map(|s| s.to_string()).collect())
}

fn uv_bindings() -> Vec<CurveBinding> {
    [
        "uvRepeatAnimU",
        "uvRepeatAnimV",
        "uvOffsetAnimU",
        "uvOffsetAnimV",
    ]
    .iter()
    .map(|name| CurveBinding::new(*name, "Body/Tail", TargetComponent::Transform))
    .collect()
}

#[test]
fn all_four_channels_map_to_st_axes() {
    let object = ImportedObject::new(
        "Tail",
        path(&["Chimera", "Body", "Tail"]),
        vec![RendererKind::MeshRenderer],
    );
    let out = rewrite_object_bindings_default(&[], &object, &uv_bindings());
    let names: Vec<&str> = out.iter().map(|b| b.property_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "material._MainTex_ST.x",
            "material._MainTex_ST.y",
            "material._MainTex_ST.z",
            "material._MainTex_ST.w",
        ]
    );
    for binding in &out {
        assert_eq!(binding.path, "Body/Tail");
        assert_eq!(binding.target, TargetComponent::MeshRenderer);
    }
}

#[test]
fn suffixed_track_on_skinned_renderer_with_redirect() {
    let extra = vec!["_BaseMap___Tail".to_string()];
    let object = ImportedObject::new(
        "Tail",
        path(&["Chimera", "Body", "Tail"]),
        vec![RendererKind::SkinnedMeshRenderer],
    );
    let bindings = vec![CurveBinding::new(
        "uvOffsetAnimV_custom",
        "Body/Tail",
        TargetComponent::Transform,
    )];
    let out = rewrite_object_bindings_default(&extra, &object, &bindings);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].property_name, "material._BaseMap_ST.w");
    assert_eq!(out[0].path, "Body/Tail");
    assert_eq!(out[0].target, TargetComponent::SkinnedMeshRenderer);
}

#[test]
fn object_without_renderer_leaves_bindings_identical() {
    let object = ImportedObject::new("Rig", path(&["Root", "Rig"]), vec![]);
    let bindings = uv_bindings();
    let out = rewrite_object_bindings_default(&[], &object, &bindings);
    assert_eq!(out, bindings);
}

#[test]
fn non_uv_bindings_pass_through_untouched() {
    let object = ImportedObject::new(
        "Fan",
        path(&["Machine", "Fan"]),
        vec![RendererKind::MeshRenderer],
    );
    let mut bindings = uv_bindings();
    bindings.push(CurveBinding::new(
        "m_LocalPosition.x",
        "Fan",
        TargetComponent::Transform,
    ));
    let out = rewrite_object_bindings_default(&[], &object, &bindings);
    assert_eq!(out.len(), bindings.len());
    // Last row untouched, byte for byte.
    assert_eq!(out[4], bindings[4]);
    assert_eq!(out[0].property_name, "material._MainTex_ST.x");
    assert_eq!(out[0].path, "Fan");
}

#[test]
fn resolution_takes_first_record_and_defaults_to_main_tex() {
    let extra = vec!["foo___Bone01".to_string(), "bar___Bone01".to_string()];
    assert_eq!(resolve_texture_property(&extra, "Bone01"), Some("foo"));
    assert_eq!(resolve_texture_property(&extra, "Bone02"), None);

    let object = ImportedObject::new(
        "Bone02",
        path(&["Root", "Bone02"]),
        vec![RendererKind::MeshRenderer],
    );
    let bindings = vec![CurveBinding::new(
        "uvRepeatAnimU",
        "Bone02",
        TargetComponent::Transform,
    )];
    let out = rewrite_object_bindings_default(&extra, &object, &bindings);
    assert_eq!(out[0].property_name, "material._MainTex_ST.x");
}

#[test]
fn custom_default_texture_property() {
    let object = ImportedObject::new(
        "Fan",
        path(&["Machine", "Fan"]),
        vec![RendererKind::MeshRenderer],
    );
    let bindings = vec![CurveBinding::new(
        "uvOffsetAnimU",
        "Fan",
        TargetComponent::Transform,
    )];
    let out = rewrite_object_bindings(&[], &object, &bindings, "_BaseColorMap");
    assert_eq!(out[0].property_name, "material._BaseColorMap_ST.z");
}

#[test]
fn root_object_is_retargeted_at_empty_path() {
    let object = ImportedObject::new(
        "Machine",
        path(&["Machine"]),
        vec![RendererKind::MeshRenderer],
    );
    let bindings = vec![CurveBinding::new(
        "uvRepeatAnimV",
        "",
        TargetComponent::Transform,
    )];
    let out = rewrite_object_bindings_default(&[], &object, &bindings);
    assert_eq!(out[0].path, "");
    assert_eq!(out[0].property_name, "material._MainTex_ST.y");
}
