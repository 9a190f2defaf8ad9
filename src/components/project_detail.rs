use yew::prelude::*;

use crate::content::projects::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub project: Project,
}

/// Body of the project modal: category, title, the detail list and the
/// description paragraphs.
#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let project = &props.project;

    html! {
        <>
            <span class="modal-cat">{project.category.clone()}</span>
            <h2>{project.title.clone()}</h2>
            <dl class="modal__details">
                { project.details.iter().map(|detail| {
                    html! {
                        <div>
                            <dt>{detail.label.clone()}</dt>
                            <dd>{detail.value.clone()}</dd>
                        </div>
                    }
                }).collect::<Html>() }
            </dl>
            <p class="modal__desc">
                { project.paragraphs().into_iter().enumerate().map(|(i, paragraph)| {
                    if i == 0 {
                        html! { <>{paragraph.to_string()}</> }
                    } else {
                        html! { <><br/><br/>{paragraph.to_string()}</> }
                    }
                }).collect::<Html>() }
            </p>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::projects;

    async fn render(id: &str) -> String {
        let project = projects::lookup(id).unwrap().clone();
        yew::ServerRenderer::<ProjectDetail>::with_props(move || ProjectDetailProps { project })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn ullagaram_renders_title_category_and_five_rows() {
        let html = render("p1").await;

        assert!(html.contains(r#"<span class="modal-cat">Facade Treatment · Residential</span>"#));
        assert!(html.contains("<h2>Ullagaram Duplex House</h2>"));
        assert!(html.contains(r#"<dl class="modal__details">"#));
        assert_eq!(html.matches("<dt>").count(), 5);
        assert_eq!(html.matches("<dd>").count(), 5);
        assert!(html.contains("<div><dt>Location</dt><dd>Ullagaram, Chennai</dd></div>"));
    }

    #[tokio::test]
    async fn paragraphs_are_separated_by_two_line_breaks() {
        let html = render("p1").await;

        assert!(html.contains(r#"<p class="modal__desc">The client wished"#));
        assert!(html.contains("décor.<br><br>The design plays"));
        assert_eq!(html.matches("<br>").count(), 2);
    }

    #[tokio::test]
    async fn single_paragraph_has_no_breaks() {
        let html = render("p4").await;

        assert!(html.contains("<h2>30×40 Residence — Tumkur</h2>"));
        assert!(!html.contains("<br>"));
    }

    #[tokio::test]
    async fn text_is_escaped() {
        let html = render("p2").await;

        assert!(html.contains("Vedha, Clover &amp; Capella Residences"));
    }
}
