//! Drag handle validation.

use crate::element::QueryDescendants;

/// Check whether `target` may start a drag of `root`.
///
/// Without a selector the whole root is a handle. With one, `target` must be
/// one of the descendants of `root` matched by it, compared by identity, so
/// matching elements outside `root` never qualify. The match set is queried
/// on every call. A selector the host cannot evaluate rejects the target.
pub fn valid_element<R>(target: &R::Element, root: &R, handle_selector: Option<&str>) -> bool
where
    R: QueryDescendants + ?Sized,
{
    let Some(selector) = handle_selector else {
        return true;
    };

    match root.query_descendants(selector) {
        Ok(handles) => handles.iter().any(|handle| handle == target),
        Err(e) => {
            log::warn!("Handle selector rejected: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Scene, SceneNode};
    use kurbo::Rect;

    fn dialog_scene() -> Scene {
        let mut scene = Scene::new(SceneNode::new("body", Rect::new(0.0, 0.0, 800.0, 600.0)));
        let root = scene.root();
        let dialog = scene.append(
            root,
            SceneNode::new("div", Rect::new(100.0, 100.0, 400.0, 300.0))
                .with_id("dialog")
                .with_class("modal"),
        );
        scene.append(
            dialog,
            SceneNode::new("header", Rect::new(100.0, 100.0, 400.0, 130.0))
                .with_id("title")
                .with_class("drag-handle"),
        );
        scene.append(
            dialog,
            SceneNode::new("p", Rect::new(100.0, 130.0, 400.0, 300.0)).with_id("body"),
        );
        scene.append(
            root,
            SceneNode::new("header", Rect::new(0.0, 500.0, 800.0, 600.0))
                .with_id("footer")
                .with_class("drag-handle"),
        );
        scene
    }

    #[test]
    fn test_no_selector_always_valid() {
        let scene = dialog_scene();
        let dialog = scene.element_by_id("dialog").unwrap();
        for id in ["dialog", "title", "body", "footer"] {
            let target = scene.element_by_id(id).unwrap();
            assert!(valid_element(&target, &dialog, None));
        }
    }

    #[test]
    fn test_matching_descendant_is_valid() {
        let scene = dialog_scene();
        let dialog = scene.element_by_id("dialog").unwrap();
        let title = scene.element_by_id("title").unwrap();
        assert!(valid_element(&title, &dialog, Some(".drag-handle")));
        assert!(valid_element(&title, &dialog, Some("header")));
    }

    #[test]
    fn test_non_matching_descendant_is_invalid() {
        let scene = dialog_scene();
        let dialog = scene.element_by_id("dialog").unwrap();
        let body = scene.element_by_id("body").unwrap();
        assert!(!valid_element(&body, &dialog, Some(".drag-handle")));
    }

    #[test]
    fn test_match_outside_root_is_invalid() {
        let scene = dialog_scene();
        let dialog = scene.element_by_id("dialog").unwrap();
        let footer = scene.element_by_id("footer").unwrap();
        assert!(!valid_element(&footer, &dialog, Some(".drag-handle")));

        // The same selector does accept it from the enclosing root.
        let body = scene.element(scene.root());
        assert!(valid_element(&footer, &body, Some(".drag-handle")));
    }

    #[test]
    fn test_root_itself_is_not_a_descendant() {
        let scene = dialog_scene();
        let dialog = scene.element_by_id("dialog").unwrap();
        assert!(!valid_element(&dialog, &dialog, Some(".modal")));
    }

    #[test]
    fn test_unsupported_selector_rejects() {
        let scene = dialog_scene();
        let dialog = scene.element_by_id("dialog").unwrap();
        let title = scene.element_by_id("title").unwrap();
        assert!(!valid_element(&title, &dialog, Some("")));
        assert!(!valid_element(&title, &dialog, Some("div > header")));
    }
}
