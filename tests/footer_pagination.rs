mod common;

use common::{content_streams, stream_shows};
use laudo_pdf::{BufferedCanvas, Font, Surface};

fn document_with_pages(n: usize) -> Vec<u8> {
    let mut canvas = BufferedCanvas::a4();
    for i in 0..n {
        canvas.set_font(Font::Helvetica, 10.0);
        canvas.draw_string(50.0, 700.0, &format!("conteúdo da página {}", i + 1));
        canvas.show_page();
    }
    canvas.finish()
}

#[test]
fn zero_pages_commit_to_an_empty_document() {
    let _ = env_logger::try_init();
    let pdf = document_with_pages(0);
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(content_streams(&pdf).is_empty());
}

#[test]
fn single_page_footer_reads_one_of_one() {
    let _ = env_logger::try_init();
    let pdf = document_with_pages(1);
    let streams = content_streams(&pdf);
    assert_eq!(streams.len(), 1);
    assert!(stream_shows(&streams[0], "Página 1 de 1"));
}

#[test]
fn three_page_footers_show_the_eventual_total_in_order() {
    let _ = env_logger::try_init();
    let pdf = document_with_pages(3);
    let streams = content_streams(&pdf);
    assert_eq!(streams.len(), 3);
    for (i, stream) in streams.iter().enumerate() {
        let own = format!("Página {} de 3", i + 1);
        assert!(
            stream_shows(stream, &own),
            "page {} is missing its footer",
            i + 1
        );
        // No other page shows this page's footer string.
        for (j, other) in streams.iter().enumerate() {
            if j != i {
                assert!(
                    !stream_shows(other, &own),
                    "footer {own:?} leaked onto page {}",
                    j + 1
                );
            }
        }
    }
}

#[test]
fn every_page_carries_the_fixed_chrome_text() {
    let _ = env_logger::try_init();
    let pdf = document_with_pages(2);
    let streams = content_streams(&pdf);
    assert_eq!(streams.len(), 2);
    for stream in &streams {
        assert!(stream_shows(
            stream,
            "Sistema Desenvolvido por IA e pela Habisolute Engenharia"
        ));
        // Start and end of the wrapped disclaimer survive encoding.
        assert!(stream_shows(stream, "Estes resultados referem-se"));
        assert!(stream_shows(stream, "0,90Mpa."));
    }
}

#[test]
fn body_content_lands_on_its_own_page() {
    let _ = env_logger::try_init();
    let pdf = document_with_pages(2);
    let streams = content_streams(&pdf);
    assert!(stream_shows(&streams[0], "conteúdo da página 1"));
    assert!(!stream_shows(&streams[0], "conteúdo da página 2"));
    assert!(stream_shows(&streams[1], "conteúdo da página 2"));
}
