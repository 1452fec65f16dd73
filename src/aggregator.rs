use crate::cache::Memo;
use crate::openlibrary::OpenLibraryClient;
use crate::wikipedia::{WikipediaClient, WikipediaError};

/// Fallback literals substituted when an upstream lookup fails. The front
/// end renders these verbatim, so they are part of the response contract.
pub const BIOGRAFIA_AMBIGUA: &str = "Biografia ambígua, não encontrada claramente.";
pub const ERRO_ACESSO_WIKIPEDIA: &str = "Erro ao acessar Wikipedia.";
pub const BIOGRAFIA_INDISPONIVEL: &str = "Biografia não disponível.";
pub const TITULO_DESCONHECIDO: &str = "Título Desconhecido";
pub const DESCONHECIDO: &str = "Desconhecido";
pub const SEM_NOTA: &str = "Sem nota";
pub const RESUMO_INDISPONIVEL: &str = "Resumo não disponível.";
pub const ERRO_BUSCAR_OBRAS: &str = "Erro ao buscar obras";
pub const ERRO_ACESSO_OPENLIBRARY: &str = "Erro ao acessar o OpenLibrary";
pub const OBRA_NAO_ENCONTRADA: &str = "Obra não encontrada";

const BIOGRAPHY_SENTENCES: usize = 5;
const DESCRIPTION_SENTENCES: usize = 3;
const MAX_MAIN_WORKS: usize = 5;

#[derive(Debug, Clone)]
pub struct AuthorInfo {
    pub nome: String,
    pub biografia: String,
    pub imagem: String,
    pub obras_principais: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum WorkLookup {
    Found(WorkDetails),
    NotFound,
    Error(String),
}

#[derive(Debug, Clone)]
pub struct WorkDetails {
    pub titulo: String,
    pub autor: String,
    pub ano_publicacao: Option<i64>,
    pub nota: Option<f64>,
    pub descricao: String,
    pub capa: Option<String>,
}

/// Fans out to the encyclopedia and the bibliographic catalog and merges
/// the results into stable response values. Every upstream failure is
/// absorbed here and replaced by a fallback literal; callers never see an
/// error. Each lookup memoizes its final resolved value on the raw input
/// string (no normalization), one bounded LRU table per operation.
pub struct Aggregator {
    wikipedia: WikipediaClient,
    openlibrary: OpenLibraryClient,
    placeholder_image: String,
    biography_cache: Memo<String>,
    image_cache: Memo<Option<String>>,
    works_cache: Memo<Vec<String>>,
    work_cache: Memo<WorkLookup>,
}

impl Aggregator {
    pub fn new(
        wikipedia: WikipediaClient,
        openlibrary: OpenLibraryClient,
        placeholder_image: String,
        cache_capacity: usize,
    ) -> Aggregator {
        Aggregator {
            wikipedia,
            openlibrary,
            placeholder_image,
            biography_cache: Memo::new(cache_capacity),
            image_cache: Memo::new(cache_capacity),
            works_cache: Memo::new(cache_capacity),
            work_cache: Memo::new(cache_capacity),
        }
    }

    /// First five sentences of the author's encyclopedia summary, or a
    /// failure-specific fallback. Never fails.
    pub async fn biography(&self, nome: &str) -> String {
        if let Some(hit) = self.biography_cache.get(nome).await {
            return hit;
        }

        let biografia = match self.wikipedia.summary(nome, BIOGRAPHY_SENTENCES).await {
            Ok(resumo) => resumo,
            Err(err) => {
                log::warn!("biography lookup for {nome:?} substituted: {err}");
                Self::biography_fallback(&err).to_string()
            }
        };

        self.biography_cache
            .insert(nome.to_string(), biografia.clone())
            .await;
        biografia
    }

    fn biography_fallback(err: &WikipediaError) -> &'static str {
        match err {
            WikipediaError::Disambiguation => BIOGRAFIA_AMBIGUA,
            WikipediaError::Timeout => ERRO_ACESSO_WIKIPEDIA,
            _ => BIOGRAFIA_INDISPONIVEL,
        }
    }

    /// URL of the author's encyclopedia portrait, or `None` on any failure
    /// (ambiguity, timeout, missing page, page without images).
    pub async fn author_image(&self, nome: &str) -> Option<String> {
        if let Some(hit) = self.image_cache.get(nome).await {
            return hit;
        }

        let imagem = match self.wikipedia.lead_image(nome).await {
            Ok(url) => Some(url),
            Err(err) => {
                log::warn!("image lookup for {nome:?} substituted: {err}");
                None
            }
        };

        self.image_cache
            .insert(nome.to_string(), imagem.clone())
            .await;
        imagem
    }

    /// Up to five work titles by the author. Documents without a title
    /// yield the unknown-title literal rather than being dropped; a catalog
    /// failure becomes a single-entry fallback list so the response field
    /// is still populated.
    pub async fn main_works(&self, nome: &str) -> Vec<String> {
        if let Some(hit) = self.works_cache.get(nome).await {
            return hit;
        }

        let obras = match self.openlibrary.search_by_author(nome).await {
            Ok(response) => response
                .docs
                .into_iter()
                .take(MAX_MAIN_WORKS)
                .map(|doc| doc.title.unwrap_or_else(|| TITULO_DESCONHECIDO.to_string()))
                .collect(),
            Err(err) => {
                log::warn!("works lookup for {nome:?} substituted: {err}");
                vec![ERRO_BUSCAR_OBRAS.to_string()]
            }
        };

        self.works_cache
            .insert(nome.to_string(), obras.clone())
            .await;
        obras
    }

    /// Catalog lookup for a work, enriched with a short encyclopedia
    /// description keyed on the catalog-corrected title. Missing fields get
    /// per-field fallbacks; zero catalog matches yield [`WorkLookup::NotFound`];
    /// a catalog network failure yields [`WorkLookup::Error`].
    pub async fn work_by_title(&self, titulo: &str, autor: Option<&str>) -> WorkLookup {
        // The author hint narrows the catalog query, so it is part of the key.
        let key = match autor {
            Some(autor) => format!("{titulo}\u{1f}{autor}"),
            None => titulo.to_string(),
        };
        if let Some(hit) = self.work_cache.get(&key).await {
            return hit;
        }

        let lookup = match self.openlibrary.search_by_title(titulo, autor).await {
            Ok(response) => match response.docs.into_iter().next() {
                Some(doc) => {
                    let titulo = doc.title.unwrap_or_else(|| DESCONHECIDO.to_string());
                    let autor = doc
                        .author_name
                        .into_iter()
                        .next()
                        .unwrap_or_else(|| DESCONHECIDO.to_string());
                    let capa = doc.cover_i.map(|id| self.openlibrary.cover_url(id));

                    let descricao = match self
                        .wikipedia
                        .summary(&titulo, DESCRIPTION_SENTENCES)
                        .await
                    {
                        Ok(resumo) => resumo,
                        Err(err) => {
                            log::warn!("description lookup for {titulo:?} substituted: {err}");
                            RESUMO_INDISPONIVEL.to_string()
                        }
                    };

                    WorkLookup::Found(WorkDetails {
                        titulo,
                        autor,
                        ano_publicacao: doc.first_publish_year,
                        nota: doc.ratings_average,
                        descricao,
                        capa,
                    })
                }
                None => WorkLookup::NotFound,
            },
            Err(err) => {
                log::warn!("work lookup for {titulo:?} failed: {err}");
                WorkLookup::Error(ERRO_ACESSO_OPENLIBRARY.to_string())
            }
        };

        self.work_cache.insert(key, lookup.clone()).await;
        lookup
    }

    /// Merged author payload: biography, main works and portrait, fetched
    /// sequentially. A missing portrait gets the placeholder image.
    pub async fn author_info(&self, nome: &str) -> AuthorInfo {
        let biografia = self.biography(nome).await;
        let obras_principais = self.main_works(nome).await;
        let imagem = self
            .author_image(nome)
            .await
            .unwrap_or_else(|| self.placeholder_image.clone());

        AuthorInfo {
            nome: nome.to_string(),
            biografia,
            imagem,
            obras_principais,
        }
    }

    pub async fn work_info(&self, titulo: &str, autor: Option<&str>) -> WorkLookup {
        self.work_by_title(titulo, autor).await
    }
}
