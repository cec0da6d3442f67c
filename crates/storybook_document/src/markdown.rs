//! Markdown storybook renderer.

use async_trait::async_trait;
use derive_getters::Getters;
use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use storybook_core::SceneResult;
use storybook_error::{DocumentError, DocumentErrorKind, StorybookResult};
use storybook_interface::{DocumentAssembler, StoryExecution};
use tracing::{debug, info, instrument, warn};

/// File name used when none is configured.
pub const DEFAULT_DOCUMENT_NAME: &str = "storybook.md";

/// Heading of the title page.
pub const DOCUMENT_TITLE: &str = "AI Generated Storybook";

/// Marker placed between pages. Markdown-to-PDF converters honor it as a
/// hard page break.
pub const PAGE_BREAK: &str = r#"<div style="page-break-after: always;"></div>"#;

/// Writes a storybook as a Markdown document.
///
/// Layout:
///
/// ```text
/// # AI Generated Storybook
/// Story: ...
/// Genre: ... | Tone: ... | Audience: ...
/// <page break>
/// ## Scene 1
/// text
/// ![Scene 1](scene_1.png)
/// <page break>
/// ## Scene 2
/// ...
/// ```
///
/// Image links are relative to the document. A scene whose image file has
/// gone missing is rendered without it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MarkdownAssembler {
    /// Name of the file written into the output directory
    file_name: String,
}

impl MarkdownAssembler {
    /// Assembler writing [`DEFAULT_DOCUMENT_NAME`].
    pub fn new() -> Self {
        Self {
            file_name: DEFAULT_DOCUMENT_NAME.to_string(),
        }
    }

    /// Use a different document file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Render `execution` to Markdown.
    ///
    /// `images` holds, per scene, the link to embed (if any). It must line up
    /// with `execution.scenes`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentErrorKind::InconsistentScenes`] if the scenes are not
    /// numbered 1..=N for the requested N or `images` has the wrong length,
    /// and [`DocumentErrorKind::Render`] if formatting the text fails.
    pub fn render(
        &self,
        execution: &StoryExecution,
        images: &[Option<String>],
    ) -> Result<String, DocumentError> {
        check_scenes(execution)?;
        if images.len() != execution.scenes.len() {
            return Err(DocumentError::new(DocumentErrorKind::InconsistentScenes(
                format!(
                    "{} image links for {} scenes",
                    images.len(),
                    execution.scenes.len()
                ),
            )));
        }

        let mut out = String::new();
        render_into(&mut out, execution, images).map_err(|e| {
            DocumentError::new(DocumentErrorKind::Render(e.to_string()))
        })?;

        Ok(out)
    }
}

fn render_into(
    out: &mut String,
    execution: &StoryExecution,
    images: &[Option<String>],
) -> fmt::Result {
    let request = &execution.request;

    writeln!(out, "# {}\n", DOCUMENT_TITLE)?;
    writeln!(out, "Story: {}\n", request.story_idea())?;
    writeln!(
        out,
        "Genre: {} | Tone: {} | Audience: {}",
        request.genre(),
        request.tone(),
        request.audience()
    )?;

    for (scene, image) in execution.scenes.iter().zip(images) {
        writeln!(out, "\n{}\n", PAGE_BREAK)?;
        render_scene(out, scene, image.as_deref())?;
    }

    Ok(())
}

fn render_scene(out: &mut String, scene: &SceneResult, image: Option<&str>) -> fmt::Result {
    let n = scene.scene_number();
    writeln!(out, "## Scene {}\n", n)?;
    writeln!(out, "{}", scene.text())?;

    if let Some(link) = image {
        writeln!(out, "\n![Scene {}]({})", n, link)?;
    }

    Ok(())
}

fn check_scenes(execution: &StoryExecution) -> Result<(), DocumentError> {
    let expected = *execution.request.scene_count() as usize;
    if execution.scenes.len() != expected {
        return Err(DocumentError::new(DocumentErrorKind::InconsistentScenes(
            format!(
                "expected {} scenes, found {}",
                expected,
                execution.scenes.len()
            ),
        )));
    }

    for (idx, scene) in execution.scenes.iter().enumerate() {
        let expected_number = idx as u32 + 1;
        if *scene.scene_number() != expected_number {
            return Err(DocumentError::new(DocumentErrorKind::InconsistentScenes(
                format!(
                    "scene at position {} is numbered {}",
                    expected_number,
                    scene.scene_number()
                ),
            )));
        }
    }

    Ok(())
}

#[async_trait]
impl DocumentAssembler for MarkdownAssembler {
    #[instrument(skip(self, execution), fields(scenes = execution.scenes.len(), dir = %output_dir.display()))]
    async fn assemble(
        &self,
        execution: &StoryExecution,
        output_dir: &Path,
    ) -> StorybookResult<PathBuf> {
        tokio::fs::create_dir_all(output_dir).await.map_err(|e| {
            DocumentError::new(DocumentErrorKind::DirectoryCreation(format!(
                "{}: {}",
                output_dir.display(),
                e
            )))
        })?;

        let mut images = Vec::with_capacity(execution.scenes.len());
        for scene in &execution.scenes {
            images.push(Self::image_link(scene, output_dir).await);
        }

        let markdown = self.render(execution, &images)?;

        let path = output_dir.join(&self.file_name);
        let temp_path = path.with_extension("tmp");

        tokio::fs::write(&temp_path, markdown.as_bytes())
            .await
            .map_err(|e| {
                DocumentError::new(DocumentErrorKind::FileWrite(format!(
                    "{}: {}",
                    temp_path.display(),
                    e
                )))
            })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            DocumentError::new(DocumentErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        debug!(bytes = markdown.len(), "Wrote document");
        info!(path = %path.display(), "Storybook assembled");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storybook_core::StoryRequest;

    fn execution(scene_numbers: &[u32], scene_count: u32) -> StoryExecution {
        let request = StoryRequest::builder()
            .story_idea("A cat who runs a bakery")
            .genre("comedy")
            .audience("kids")
            .tone("lighthearted")
            .scene_count(scene_count)
            .art_style("cartoon")
            .build()
            .unwrap();

        let scenes = scene_numbers
            .iter()
            .map(|n| SceneResult::new(*n, format!("Scene text number {} is long enough.", n), None))
            .collect();

        StoryExecution { request, scenes }
    }

    #[test]
    fn test_title_page() {
        let markdown = MarkdownAssembler::new()
            .render(&execution(&[1], 1), &[None])
            .unwrap();

        assert!(markdown.starts_with("# AI Generated Storybook\n"));
        assert!(markdown.contains("Story: A cat who runs a bakery\n"));
        assert!(markdown.contains("Genre: comedy | Tone: lighthearted | Audience: kids\n"));
    }

    #[test]
    fn test_one_page_per_scene() {
        let markdown = MarkdownAssembler::new()
            .render(
                &execution(&[1, 2, 3], 3),
                &[Some("scene_1.png".to_string()), None, Some("scene_3.jpg".to_string())],
            )
            .unwrap();

        assert_eq!(markdown.matches(PAGE_BREAK).count(), 3);
        assert!(markdown.contains("## Scene 1\n"));
        assert!(markdown.contains("![Scene 1](scene_1.png)"));
        assert!(!markdown.contains("![Scene 2]"));
        assert!(markdown.contains("![Scene 3](scene_3.jpg)"));

        let first = markdown.find("## Scene 1").unwrap();
        let third = markdown.find("## Scene 3").unwrap();
        assert!(first < third);
    }

    #[test]
    fn test_exact_page_layout() {
        let markdown = MarkdownAssembler::new()
            .render(&execution(&[1, 2], 2), &[Some("scene_1.png".to_string()), None])
            .unwrap();

        let expected = format!(
            "# AI Generated Storybook\n\n\
             Story: A cat who runs a bakery\n\n\
             Genre: comedy | Tone: lighthearted | Audience: kids\n\
             \n{pb}\n\n\
             ## Scene 1\n\n\
             Scene text number 1 is long enough.\n\
             \n![Scene 1](scene_1.png)\n\
             \n{pb}\n\n\
             ## Scene 2\n\n\
             Scene text number 2 is long enough.\n",
            pb = PAGE_BREAK
        );
        assert_eq!(markdown, expected);
    }

    #[test]
    fn test_rejects_gaps_in_numbering() {
        let err = MarkdownAssembler::new()
            .render(&execution(&[1, 3], 2), &[None, None])
            .unwrap_err();
        assert!(matches!(err.kind, DocumentErrorKind::InconsistentScenes(_)));
    }

    #[test]
    fn test_rejects_wrong_scene_count() {
        let err = MarkdownAssembler::new()
            .render(&execution(&[1, 2], 3), &[None, None])
            .unwrap_err();
        assert!(matches!(err.kind, DocumentErrorKind::InconsistentScenes(_)));
    }

    #[test]
    fn test_rejects_mismatched_image_links() {
        let err = MarkdownAssembler::new()
            .render(&execution(&[1, 2], 2), &[None])
            .unwrap_err();
        assert!(matches!(err.kind, DocumentErrorKind::InconsistentScenes(_)));
    }
}
